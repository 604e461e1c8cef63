//! メインアプリケーションコンポーネント

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo::timers::callback::Timeout;
use movie_id_common::{CaptionStage, FlowId, UploadConfig, UploadController, CAPTION_SCHEDULE};
use crate::api::identify::identify;
use crate::components::{
    drop_zone::DropZone,
    error_panel::ErrorPanel,
    header::Header,
    loading_panel::LoadingPanel,
    result_panel::ResultPanel,
};
use crate::files::WebFile;

/// ウィジェットの状態（web_sys::File を含むためローカル保持）
pub type ControllerSignal = RwSignal<UploadController<WebFile>, LocalStorage>;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let controller: ControllerSignal = RwSignal::new_local(UploadController::new());

    view! { <UploadWidget controller=controller config=UploadConfig::default() /> }
}

/// アップロードウィジェット本体
#[component]
pub fn UploadWidget(controller: ControllerSignal, config: UploadConfig) -> impl IntoView {
    let file_input = NodeRef::<html::Input>::new();

    // ドロップ/ファイル選択ハンドラ
    let on_files = move |files: Vec<WebFile>| {
        start_flow(controller, config.clone(), files);
    };

    // 閉じる/再試行ハンドラ
    let on_reset = move |_| {
        controller.update(|c| c.reset());
        // 同じファイルをすぐ選び直せるように選択をクリア
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
    };

    view! {
        <div class="container">
            <Header />

            <DropZone controller=controller file_input=file_input on_files=on_files />

            <LoadingPanel controller=controller />

            <ResultPanel controller=controller on_close=on_reset />

            <ErrorPanel controller=controller on_retry=on_reset />
        </div>
    }
}

/// 1回のアップロードフローを開始する
fn start_flow(controller: ControllerSignal, config: UploadConfig, files: Vec<WebFile>) {
    let ticket = controller.try_update(|c| c.begin_upload(files)).flatten();
    let Some(ticket) = ticket else {
        if let Some(message) = controller.with_untracked(|c| c.error_message()) {
            gloo::console::warn!(format!("upload rejected: {}", message));
        }
        return;
    };

    let flow = ticket.id();
    arm_captions(controller, flow, &CAPTION_SCHEDULE);

    spawn_local(async move {
        let outcome = identify(&config, ticket.files()).await;
        controller.update(move |c| {
            if c.finish(ticket, outcome) {
                gloo::console::log!(format!("flow {} finished: {}", flow, c.state().as_str()));
            } else {
                gloo::console::log!(format!("discarded response of superseded flow {}", flow));
            }
        });
    });
}

/// 遅延文言のタイマーを仕掛ける
///
/// タイマーは取り消さず、発火時にフローIDで判定する。
fn arm_captions(controller: ControllerSignal, flow: FlowId, schedule: &[CaptionStage]) {
    for stage in schedule.iter().copied() {
        Timeout::new(stage.delay_ms, move || {
            controller.maybe_update(|c| c.caption_tick(flow, &stage));
        })
        .forget();
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use leptos::mount::mount_to;
    use movie_id_common::render::NO_LINKS_NOTICE;
    use movie_id_common::{
        FlowError, FlowOutcome, IdentificationResult, Panel, StreamingLink, UploadState,
        DEFAULT_CAPTION,
    };
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_test::*;
    use web_sys::{
        DragEvent, DragEventInit, Element, File, FilePropertyBag, HtmlElement, HtmlInputElement,
    };

    wasm_bindgen_test_configure!(run_in_browser);

    fn container() -> HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let root: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    fn new_controller() -> ControllerSignal {
        RwSignal::new_local(UploadController::new())
    }

    /// 描画エフェクトの反映を待つ
    async fn settle(ms: u32) {
        TimeoutFuture::new(ms).await;
    }

    fn find(root: &HtmlElement, selector: &str) -> Element {
        root.query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("{} が見つからない", selector))
    }

    fn click(root: &HtmlElement, selector: &str) {
        find(root, selector).dyn_into::<HtmlElement>().unwrap().click();
    }

    fn text(root: &HtmlElement, selector: &str) -> String {
        find(root, selector).text_content().unwrap_or_default()
    }

    fn is_hidden(root: &HtmlElement, panel: Panel) -> bool {
        let section = find(root, &format!("#{}", panel.section_id()));
        section.class_name().split_whitespace().any(|c| c == "hidden")
    }

    fn assert_only_visible(root: &HtmlElement, panel: Panel) {
        for other in Panel::ALL {
            assert_eq!(is_hidden(root, other), other != panel, "{:?} の表示状態が不正", other);
        }
    }

    fn link_count(root: &HtmlElement) -> u32 {
        root.query_selector_all("#links-grid a").unwrap().length()
    }

    fn shot(name: &str) -> WebFile {
        let parts = js_sys::Array::of1(&JsValue::from_str("dummy"));
        let options = FilePropertyBag::new();
        options.set_type("image/png");
        WebFile::new(File::new_with_str_sequence_and_options(&parts, name, &options).unwrap())
    }

    fn identified(urls: &[&str]) -> FlowOutcome {
        Ok(IdentificationResult {
            title: "Spirited Away".to_string(),
            year: Some("2001".to_string()),
            summary: "A girl wanders into a world of spirits.".to_string(),
            confidence: Some(0.91),
            is_movie: true,
            links: urls
                .iter()
                .map(|url| StreamingLink {
                    url: url.to_string(),
                    ..Default::default()
                })
                .collect(),
        })
    }

    /// 通信なしで1フローを完了させる
    fn run_flow(controller: ControllerSignal, outcome: FlowOutcome) {
        controller.update(|c| {
            let ticket = c.begin_upload(vec![shot("a.png")]).unwrap();
            c.finish(ticket, outcome);
        });
    }

    fn mount(root: &HtmlElement, controller: ControllerSignal) -> impl Sized {
        mount_to(root.clone(), move || {
            view! { <UploadWidget controller=controller config=UploadConfig::default() /> }
        })
    }

    fn drag_event(kind: &str) -> DragEvent {
        let init = DragEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        DragEvent::new_with_event_init_dict(kind, &init).unwrap()
    }

    #[wasm_bindgen_test]
    async fn test_initial_render_shows_upload_only() {
        let root = container();
        let _mounted = mount(&root, new_controller());
        settle(0).await;

        assert_only_visible(&root, Panel::Upload);
        assert_eq!(text(&root, "#loading-text"), DEFAULT_CAPTION);
    }

    #[wasm_bindgen_test]
    async fn test_links_open_in_new_tab() {
        let root = container();
        let controller = new_controller();
        let _mounted = mount(&root, controller);

        run_flow(
            controller,
            identified(&["https://www.netflix.com/title/1", "https://www.hulu.com/movie/2"]),
        );
        settle(0).await;

        assert_only_visible(&root, Panel::Result);
        assert_eq!(text(&root, "#movie-title"), "Spirited Away");
        assert_eq!(text(&root, "#movie-year"), "2001");
        assert_eq!(text(&root, "#confidence-badge"), "91% Match");
        assert_eq!(link_count(&root), 2);

        let first = find(&root, "#links-grid a");
        assert_eq!(first.get_attribute("href").as_deref(), Some("https://www.netflix.com/title/1"));
        assert_eq!(first.get_attribute("target").as_deref(), Some("_blank"));
        assert_eq!(first.get_attribute("rel").as_deref(), Some("noopener noreferrer"));
        assert!(first.text_content().unwrap_or_default().contains("Watch on netflix.com"));
    }

    #[wasm_bindgen_test]
    async fn test_links_do_not_pile_up_across_results() {
        let root = container();
        let controller = new_controller();
        let _mounted = mount(&root, controller);

        run_flow(controller, identified(&["https://www.netflix.com/title/1"]));
        settle(0).await;
        assert_eq!(link_count(&root), 1);

        click(&root, "#close-btn");
        settle(0).await;
        assert_only_visible(&root, Panel::Upload);

        // 2回目はリンクなし → プレースホルダのみ
        run_flow(controller, identified(&[]));
        settle(0).await;
        assert_eq!(link_count(&root), 0);
        assert!(text(&root, "#links-grid").contains(NO_LINKS_NOTICE));

        click(&root, "#close-btn");
        settle(0).await;
        run_flow(
            controller,
            identified(&["https://www.max.com/movies/1", "https://tv.apple.com/show/2"]),
        );
        settle(0).await;
        assert_eq!(link_count(&root), 2);
        assert!(!text(&root, "#links-grid").contains(NO_LINKS_NOTICE));
    }

    #[wasm_bindgen_test]
    async fn test_retry_returns_to_upload_and_clears_input() {
        let root = container();
        let controller = new_controller();
        let _mounted = mount(&root, controller);

        run_flow(controller, Err(FlowError::NotIdentified));
        settle(0).await;
        assert_only_visible(&root, Panel::Error);
        assert_eq!(text(&root, "#error-message"), FlowError::NotIdentified.user_message());

        click(&root, "#retry-btn");
        settle(0).await;

        assert_only_visible(&root, Panel::Upload);
        assert!(controller.with_untracked(|c| c.state() == &UploadState::Idle));
        assert!(controller.with_untracked(|c| c.pending().is_empty()));
        let input: HtmlInputElement = find(&root, "#file-input").dyn_into().unwrap();
        assert_eq!(input.value(), "");
    }

    #[wasm_bindgen_test]
    async fn test_drag_events_prevent_default() {
        let root = container();
        let _mounted = mount(&root, new_controller());
        settle(0).await;
        let zone = find(&root, "#drop-zone");

        let over = drag_event("dragover");
        zone.dispatch_event(&over).unwrap();
        assert!(over.default_prevented());
        settle(0).await;
        assert!(zone.class_name().contains("dragover"));

        // ファイルなしのドロップ: ページ遷移を止めるだけで状態は変わらない
        let drop = drag_event("drop");
        zone.dispatch_event(&drop).unwrap();
        assert!(drop.default_prevented());
        settle(0).await;
        assert!(!zone.class_name().contains("dragover"));
        assert_only_visible(&root, Panel::Upload);
    }

    #[wasm_bindgen_test]
    async fn test_caption_timer_updates_loading_text() {
        let root = container();
        let controller = new_controller();
        let _mounted = mount(&root, controller);

        let ticket = controller
            .try_update(|c| c.begin_upload(vec![shot("a.png")]))
            .flatten()
            .unwrap();
        let stage = CaptionStage { delay_ms: 10, text: "Querying the vision model..." };
        arm_captions(controller, ticket.id(), &[stage]);
        settle(50).await;

        assert_only_visible(&root, Panel::Loading);
        assert_eq!(text(&root, "#loading-text"), stage.text);
        controller.update(|c| {
            c.finish(ticket, Err(FlowError::NotIdentified));
        });
    }

    #[wasm_bindgen_test]
    async fn test_stale_caption_timer_after_finish() {
        let root = container();
        let controller = new_controller();
        let _mounted = mount(&root, controller);

        let ticket = controller
            .try_update(|c| c.begin_upload(vec![shot("a.png")]))
            .flatten()
            .unwrap();
        arm_captions(
            controller,
            ticket.id(),
            &[CaptionStage { delay_ms: 20, text: "Searching for streaming links..." }],
        );
        controller.update(|c| {
            c.finish(ticket, identified(&[]));
        });
        settle(60).await;

        // 後から発火したタイマーは文言も表示パネルも変えない
        assert_only_visible(&root, Panel::Result);
        assert_eq!(text(&root, "#loading-text"), DEFAULT_CAPTION);
    }
}
