//! 識別サービスのレスポンス分類
//!
//! HTTPステータスと本文からフローの結果を決める:
//! 1. 本文がJSONとして読めない → Transport
//! 2. 2xx以外 → Service（detailがあればそのまま表示）
//! 3. success != true → NotIdentified
//! 4. success == true → data をデコードして結果とする

use crate::error::FlowError;
use crate::types::IdentificationResult;
use serde::Deserialize;
use serde_json::Value;

/// 1回のフローの結果
pub type FlowOutcome = std::result::Result<IdentificationResult, FlowError>;

/// レスポンスエンベロープ
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IdentifyResponse {
    pub success: Option<bool>,
    /// 成功時のみ IdentificationResult としてデコードする
    pub data: Option<Value>,
    pub detail: Option<Value>,
}

impl IdentifyResponse {
    /// 文字列のdetailのみ表示に使う（FastAPIの検証エラーは配列になる）
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

/// ステータスと本文を分類する
pub fn classify(status: u16, body: &str) -> FlowOutcome {
    let response: IdentifyResponse = serde_json::from_str(body)
        .map_err(|e| FlowError::Transport(format!("invalid response body: {}", e)))?;

    if !(200..300).contains(&status) {
        return Err(FlowError::Service {
            status,
            detail: response.detail_text(),
        });
    }

    if response.success != Some(true) {
        return Err(FlowError::NotIdentified);
    }

    let data = response
        .data
        .ok_or_else(|| FlowError::Transport("response has no data".to_string()))?;

    serde_json::from_value(data)
        .map_err(|e| FlowError::Transport(format!("invalid result payload: {}", e)))
}
