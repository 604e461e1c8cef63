//! エラーパネルコンポーネント

use leptos::prelude::*;
use movie_id_common::Panel;
use crate::app::ControllerSignal;

#[component]
pub fn ErrorPanel<F>(controller: ControllerSignal, on_retry: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let is_visible = move || controller.with(|c| c.is_visible(Panel::Error));

    view! {
        <section id={Panel::Error.section_id()} class="error-section" class:hidden=move || !is_visible()>
            <div class="error-icon">"⚠"</div>
            <p id="error-message" class="error-message">
                {move || controller.with(|c| c.error_message().unwrap_or_default())}
            </p>
            <button
                id="retry-btn"
                class="btn btn-primary"
                on:click={
                    let on_retry = on_retry.clone();
                    move |_| on_retry(())
                }
            >
                "Try Again"
            </button>
        </section>
    }
}
