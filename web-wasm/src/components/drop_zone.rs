//! ドロップゾーンコンポーネント

use leptos::html;
use leptos::prelude::*;
use movie_id_common::Panel;
use web_sys::{DragEvent, HtmlInputElement};
use crate::app::ControllerSignal;
use crate::files::{files_from_list, WebFile};

#[component]
pub fn DropZone<F>(
    controller: ControllerSignal,
    file_input: NodeRef<html::Input>,
    on_files: F,
) -> impl IntoView
where
    F: Fn(Vec<WebFile>) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let is_visible = move || controller.with(|c| c.is_visible(Panel::Upload));

    let on_drop = {
        let on_files = on_files.clone();
        move |ev: DragEvent| {
            // ブラウザがファイルを開いてページ遷移しないように
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                let files = files_from_list(&files);
                if !files.is_empty() {
                    on_files(files);
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    // ファイル選択ダイアログを開く
    let on_click = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            let files = files_from_list(&list);
            if !files.is_empty() {
                on_files(files);
            }
        }
    };

    view! {
        <section id={Panel::Upload.section_id()} class="upload-section" class:hidden=move || !is_visible()>
            <div
                id="drop-zone"
                class=move || drop_zone_class(is_dragover.get())
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:click=on_click
            >
                <div class="upload-icon">"🎬"</div>
                <p>"Drop screenshots here or click to browse"</p>
                <p class="text-muted">"PNG, JPEG, WebP"</p>
            </div>
            <input
                id="file-input"
                type="file"
                accept="image/*"
                multiple=true
                class="hidden"
                node_ref=file_input
                on:change=on_change
            />
        </section>
    }
}

fn drop_zone_class(is_dragover: bool) -> &'static str {
    if is_dragover {
        "drop-zone dragover"
    } else {
        "drop-zone"
    }
}
