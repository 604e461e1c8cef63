//! 識別結果パネルコンポーネント
//!
//! サービス由来の文字列はすべてテキストノードとして描画する（innerHTMLは使わない）。

use leptos::prelude::*;
use movie_id_common::render::NO_LINKS_NOTICE;
use movie_id_common::{LinksView, Panel, ResultView};
use crate::app::ControllerSignal;

#[component]
pub fn ResultPanel<F>(controller: ControllerSignal, on_close: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let is_visible = move || controller.with(|c| c.is_visible(Panel::Result));

    // 結果が変わるたびにゼロから組み立てる
    let result_view = move || controller.with(|c| c.result().map(ResultView::from_result));

    view! {
        <section id={Panel::Result.section_id()} class="result-section" class:hidden=move || !is_visible()>
            <button
                id="close-btn"
                class="btn btn-tertiary close-btn"
                on:click={
                    let on_close = on_close.clone();
                    move |_| on_close(())
                }
            >
                "✕"
            </button>
            {move || result_view().map(ResultCard)}
        </section>
    }
}

#[allow(non_snake_case)]
fn ResultCard(result: ResultView) -> impl IntoView {
    for skipped in &result.skipped_links {
        gloo::console::warn!(format!("skipped link without a usable host: {}", skipped));
    }

    let badge = result.badge_text();
    let links = match result.links {
        LinksView::Placeholder => view! {
            <div class="links-empty">{NO_LINKS_NOTICE}</div>
        }
        .into_any(),
        LinksView::Links(links) => links
            .into_iter()
            .map(|link| {
                view! {
                    <a class="link-item" href=link.href target="_blank" rel="noopener noreferrer">
                        <span>"Watch on " <strong>{link.domain}</strong></span>
                        <i class="fa-solid fa-external-link-alt"></i>
                    </a>
                }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="result-card">
            <h2 id="movie-title" class="movie-title">{result.title}</h2>
            <div class="movie-meta">
                <span id="movie-year" class="movie-year">{result.year_label}</span>
                <span id="confidence-badge" class="confidence-badge">{badge}</span>
            </div>
            <p id="movie-summary" class="movie-summary">{result.summary}</p>
            <h3>"Where to watch"</h3>
            <div id="links-grid" class="links-grid">{links}</div>
        </div>
    }
}
