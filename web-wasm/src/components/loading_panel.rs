//! ローディングパネルコンポーネント

use leptos::prelude::*;
use movie_id_common::Panel;
use crate::app::ControllerSignal;

#[component]
pub fn LoadingPanel(controller: ControllerSignal) -> impl IntoView {
    let is_visible = move || controller.with(|c| c.is_visible(Panel::Loading));

    view! {
        <section id={Panel::Loading.section_id()} class="loading-section" class:hidden=move || !is_visible()>
            <div class="spinner"></div>
            <p id="loading-text" class="loading-text">
                {move || controller.with(|c| c.caption().to_string())}
            </p>
        </section>
    }
}
