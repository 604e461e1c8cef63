//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid link: {0}")]
    InvalidLink(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

pub const VALIDATION_MESSAGE: &str = "Please upload a valid image file.";
pub const TRANSPORT_MESSAGE: &str = "Something went wrong on our end. Please try again.";
pub const SERVICE_FALLBACK_MESSAGE: &str = "Failed to process image(s)";
pub const NOT_IDENTIFIED_MESSAGE: &str =
    "We couldn't identify a movie in those screenshots. Try clearer screenshots!";

/// アップロードフローの失敗要因
///
/// 4種類の要因はすべて単一のError状態に畳み込まれる。
/// 要因はログとテストのために保持し、表示文言は `user_message` で決まる。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    /// 選択に画像ファイルが含まれない
    #[error("no image files in selection")]
    Validation,

    /// リクエスト送信失敗、またはレスポンス本文が不正
    #[error("transport failure: {0}")]
    Transport(String),

    /// 2xx以外のステータス
    #[error("service returned status {status}")]
    Service { status: u16, detail: Option<String> },

    /// サービスが識別できなかった（success != true）
    #[error("service could not identify the screenshots")]
    NotIdentified,
}

impl FlowError {
    /// ユーザーに表示するメッセージ
    pub fn user_message(&self) -> String {
        match self {
            FlowError::Validation => VALIDATION_MESSAGE.to_string(),
            FlowError::Transport(_) => TRANSPORT_MESSAGE.to_string(),
            FlowError::Service { detail, .. } => detail
                .clone()
                .unwrap_or_else(|| SERVICE_FALLBACK_MESSAGE.to_string()),
            FlowError::NotIdentified => NOT_IDENTIFIED_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("endpoint is empty".to_string());
        assert_eq!(format!("{}", error), "Config error: endpoint is empty");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    // =============================================
    // FlowError 表示文言テスト
    // =============================================

    #[test]
    fn test_validation_message() {
        assert_eq!(FlowError::Validation.user_message(), "Please upload a valid image file.");
    }

    #[test]
    fn test_transport_message_hides_cause() {
        let error = FlowError::Transport("connection refused".to_string());
        assert_eq!(error.user_message(), TRANSPORT_MESSAGE);
        // 原因はDisplayにのみ現れる
        assert!(format!("{}", error).contains("connection refused"));
    }

    #[test]
    fn test_service_message_uses_detail() {
        let error = FlowError::Service {
            status: 400,
            detail: Some("File must be an image".to_string()),
        };
        assert_eq!(error.user_message(), "File must be an image");
    }

    #[test]
    fn test_service_message_fallback() {
        let error = FlowError::Service { status: 500, detail: None };
        assert_eq!(error.user_message(), "Failed to process image(s)");
    }

    #[test]
    fn test_not_identified_message() {
        let message = FlowError::NotIdentified.user_message();
        assert!(message.starts_with("We couldn't identify a movie"));
        assert!(message.contains("clearer screenshots"));
    }
}
