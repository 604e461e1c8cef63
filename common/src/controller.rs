//! アップロードウィジェットの状態機械
//!
//! 状態遷移:
//! - Idle → Loading → {Result, Error} → Idle（閉じる/再試行）
//! - Idle → Error（画像が1枚もない場合は送信前に弾く）
//!
//! フローごとに単調増加のIDを振る。遅延文言の更新とレスポンス反映は
//! 発行時のIDが現在のIDと一致する場合のみ有効になる。
//! 新しいアップロードやリセットで古いフローは無効になる。

use crate::config::{loading_caption, CaptionStage, DEFAULT_CAPTION};
use crate::error::FlowError;
use crate::files::{MediaFile, PendingFiles};
use crate::response::FlowOutcome;
use crate::state::{Panel, UploadState};
use crate::types::IdentificationResult;

pub type FlowId = u64;

/// 開始したフローの引換券
///
/// `finish` で消費されるため、1つのフローは高々1回しか終了処理されない。
#[derive(Debug)]
#[must_use = "a started flow must be finished with UploadController::finish"]
pub struct FlowTicket<F> {
    id: FlowId,
    files: Vec<F>,
}

impl<F> FlowTicket<F> {
    pub fn id(&self) -> FlowId {
        self.id
    }

    /// 送信対象（画像のみ、選択順）
    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn part_count(&self) -> usize {
        self.files.len()
    }
}

#[derive(Debug, Clone)]
pub struct UploadController<F> {
    state: UploadState,
    caption: String,
    pending: PendingFiles<F>,
    current_flow: FlowId,
}

impl<F: MediaFile + Clone> Default for UploadController<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: MediaFile + Clone> UploadController<F> {
    pub fn new() -> Self {
        Self {
            state: UploadState::Idle,
            caption: DEFAULT_CAPTION.to_string(),
            pending: PendingFiles::default(),
            current_flow: 0,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.state.is_visible(panel)
    }

    /// ローディング文言
    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn pending(&self) -> &PendingFiles<F> {
        &self.pending
    }

    pub fn current_flow(&self) -> FlowId {
        self.current_flow
    }

    pub fn result(&self) -> Option<&IdentificationResult> {
        match &self.state {
            UploadState::Result(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FlowError> {
        match &self.state {
            UploadState::Error(error) => Some(error),
            _ => None,
        }
    }

    /// 表示用エラーメッセージ
    pub fn error_message(&self) -> Option<String> {
        self.error().map(FlowError::user_message)
    }

    /// アップロードを開始する
    ///
    /// - 空の選択は何もしない（`None`）
    /// - 画像が1枚もなければError状態にして `None`（送信しない）
    /// - それ以外はLoadingへ遷移し、画像のみを載せた引換券を返す
    pub fn begin_upload(&mut self, files: Vec<F>) -> Option<FlowTicket<F>> {
        if files.is_empty() {
            return None;
        }

        self.current_flow += 1;
        self.pending = PendingFiles::new(files);

        let images = self.pending.images();
        if images.is_empty() {
            self.caption = DEFAULT_CAPTION.to_string();
            self.state = UploadState::Error(FlowError::Validation);
            return None;
        }

        self.caption = loading_caption(images.len());
        self.state = UploadState::Loading;

        Some(FlowTicket {
            id: self.current_flow,
            files: images,
        })
    }

    /// 遅延文言を反映する。古いフロー、またはLoading以外では何もしない。
    pub fn caption_tick(&mut self, flow: FlowId, stage: &CaptionStage) -> bool {
        if flow != self.current_flow || !self.state.is_loading() {
            return false;
        }
        self.caption = stage.text.to_string();
        true
    }

    /// フローを終了する
    ///
    /// ローディング文言を既定値へ戻してからResult/Errorへ遷移する。
    /// 無効になったフローの結果は捨てて `false` を返す。
    pub fn finish(&mut self, ticket: FlowTicket<F>, outcome: FlowOutcome) -> bool {
        if ticket.id != self.current_flow {
            return false;
        }

        self.caption = DEFAULT_CAPTION.to_string();
        self.state = match outcome {
            Ok(result) => UploadState::Result(result),
            Err(error) => UploadState::Error(error),
        };
        true
    }

    /// 閉じる/再試行: Idleへ戻し、選択・結果・エラーを破棄する
    pub fn reset(&mut self) {
        self.current_flow += 1;
        self.pending.clear();
        self.caption = DEFAULT_CAPTION.to_string();
        self.state = UploadState::Idle;
    }
}
