//! アップロード設定
//!
//! エンドポイント・multipartフィールド名・ローディング文言のスケジュール

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// ブラウザ版の既定エンドポイント（同一オリジン）
pub const DEFAULT_ENDPOINT: &str = "/api/identify";

/// 複数画像版のフィールド名
pub const DEFAULT_FIELD_NAME: &str = "images";

/// 単一画像版のフィールド名
pub const SINGLE_FILE_FIELD_NAME: &str = "file";

/// ローディング文言の既定値（フロー終了時にこの文言へ戻す）
pub const DEFAULT_CAPTION: &str = "Analyzing Scene...";

/// 遅延して差し替えるローディング文言
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptionStage {
    /// フロー開始からの遅延（ミリ秒）
    pub delay_ms: u32,
    pub text: &'static str,
}

pub const CAPTION_SCHEDULE: [CaptionStage; 2] = [
    CaptionStage {
        delay_ms: 1500,
        text: "Querying the vision model...",
    },
    CaptionStage {
        delay_ms: 3500,
        text: "Searching for streaming links...",
    },
];

/// フロー開始時のローディング文言
pub fn loading_caption(image_count: usize) -> String {
    if image_count == 1 {
        "Analyzing 1 screenshot...".to_string()
    } else {
        format!("Analyzing {} screenshots...", image_count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub endpoint: String,
    pub field_name: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            field_name: DEFAULT_FIELD_NAME.to_string(),
        }
    }
}

impl UploadConfig {
    pub fn new(endpoint: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            field_name: field_name.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::Config("endpoint is empty".into()));
        }
        if self.field_name.trim().is_empty() {
            return Err(Error::Config("multipart field name is empty".into()));
        }
        Ok(())
    }
}
