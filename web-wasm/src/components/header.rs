//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Movie Identifier"</h1>
            <p class="text-muted">"Drop a screenshot and find out what you're watching."</p>
        </header>
    }
}
