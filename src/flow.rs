//! 1回のアップロードフローを駆動する
//!
//! リクエストと遅延文言のタイマーを同じタスク上で `select!` し、
//! 文言の反映はコントローラのフローID判定を通す。

use movie_id_common::{
    FlowOutcome, FlowTicket, MediaFile, UploadController, CAPTION_SCHEDULE,
};
use std::future::Future;
use tokio::time::{sleep_until, Duration, Instant};

/// リクエスト完了まで待ち、結果をコントローラへ反映する
///
/// `on_caption` は文言が実際に変わったときだけ呼ばれる。
/// 戻り値はコントローラが結果を受け入れたか（古いフローなら `false`）。
pub async fn drive<F, Fut>(
    controller: &mut UploadController<F>,
    ticket: FlowTicket<F>,
    request: Fut,
    mut on_caption: impl FnMut(&str),
) -> bool
where
    F: MediaFile + Clone,
    Fut: Future<Output = FlowOutcome>,
{
    let started = Instant::now();
    let flow = ticket.id();
    tokio::pin!(request);

    let schedule = CAPTION_SCHEDULE;
    let mut stages = schedule.iter();
    let mut next_stage = stages.next();

    let outcome = loop {
        let Some(stage) = next_stage else {
            break (&mut request).await;
        };

        let deadline = started + Duration::from_millis(u64::from(stage.delay_ms));
        tokio::select! {
            outcome = &mut request => break outcome,
            _ = sleep_until(deadline) => {
                if controller.caption_tick(flow, stage) {
                    on_caption(controller.caption());
                }
                next_stage = stages.next();
            }
        }
    };

    controller.finish(ticket, outcome)
}
