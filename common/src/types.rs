//! 識別結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - IdentificationResult: 識別サービスが返す結果本体
//! - StreamingLink: 配信サービスへのリンク
//!
//! サービス側の出力はAI生成のため欠損や型揺れがある。
//! 全フィールドにデフォルトを持たせ、寛容にデコードする。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 配信リンク
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamingLink {
    #[serde(deserialize_with = "lenient_text")]
    pub url: String,

    #[serde(
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,

    #[serde(
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<String>,
}

/// 識別結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentificationResult {
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,

    /// 公開年（"1999" / 1999 のどちらでも受け付ける）
    #[serde(deserialize_with = "lenient_optional_text")]
    pub year: Option<String>,

    #[serde(deserialize_with = "lenient_text")]
    pub summary: String,

    /// 確信度 0.0〜1.0（数値文字列も受け付ける）
    #[serde(deserialize_with = "lenient_number")]
    pub confidence: Option<f64>,

    #[serde(deserialize_with = "lenient_flag")]
    pub is_movie: bool,

    #[serde(deserialize_with = "null_as_empty")]
    pub links: Vec<StreamingLink>,
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_optional_text(deserializer).map(Option::unwrap_or_default)
}

/// 数値または数値文字列。それ以外はNone
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        _ => false,
    })
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
