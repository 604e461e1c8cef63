//! ウィジェットの状態と表示パネル

use crate::error::FlowError;
use crate::types::IdentificationResult;

/// 4つの表示パネル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Upload,
    Loading,
    Result,
    Error,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Upload, Panel::Loading, Panel::Result, Panel::Error];

    /// DOM上のセクションID
    pub fn section_id(&self) -> &'static str {
        match self {
            Panel::Upload => "upload-section",
            Panel::Loading => "loading-section",
            Panel::Result => "result-section",
            Panel::Error => "error-section",
        }
    }
}

/// アップロード状態
///
/// 結果とエラーは状態のペイロードとして持つため、同時に存在しない。
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UploadState {
    #[default]
    Idle,
    Loading,
    Result(IdentificationResult),
    Error(FlowError),
}

impl UploadState {
    pub fn panel(&self) -> Panel {
        match self {
            UploadState::Idle => Panel::Upload,
            UploadState::Loading => Panel::Loading,
            UploadState::Result(_) => Panel::Result,
            UploadState::Error(_) => Panel::Error,
        }
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.panel() == panel
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UploadState::Loading)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadState::Idle => "idle",
            UploadState::Loading => "loading",
            UploadState::Result(_) => "result",
            UploadState::Error(_) => "error",
        }
    }
}
