use crate::error::{MovieIdError, Result};
use movie_id_common::config::DEFAULT_FIELD_NAME;
use movie_id_common::UploadConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ローカルで起動した識別サービス（uvicornの既定ポート）
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/identify";

pub const ENDPOINT_ENV: &str = "MOVIE_ID_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub field_name: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            field_name: DEFAULT_FIELD_NAME.into(),
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MovieIdError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("movie-id").join("config.json"))
    }

    /// 送信設定を組み立てる
    ///
    /// 優先順位: 引数 > 環境変数 > 設定ファイル
    pub fn upload_config(
        &self,
        endpoint: Option<String>,
        field_name: Option<String>,
    ) -> Result<UploadConfig> {
        let endpoint = endpoint
            .or_else(|| std::env::var(ENDPOINT_ENV).ok().filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| self.endpoint.clone());
        let field_name = field_name.unwrap_or_else(|| self.field_name.clone());
        check_endpoint(&endpoint)?;

        let upload = UploadConfig::new(endpoint, field_name);
        upload.validate()?;
        Ok(upload)
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        check_endpoint(&endpoint)?;
        self.endpoint = endpoint;
        Ok(())
    }

    pub fn set_field_name(&mut self, field_name: String) {
        self.field_name = field_name;
    }
}

/// 引数・環境変数・設定ファイルのどれから来てもhttp(s)のみ許可
fn check_endpoint(endpoint: &str) -> Result<()> {
    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        return Err(MovieIdError::Config(format!(
            "エンドポイントはhttp(s)のURLで指定してください: {}",
            endpoint
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.field_name, "images");
        assert_eq!(config.timeout_seconds, 120);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.set_endpoint("https://movies.example.com/api/identify".into()).unwrap();
        config.set_field_name("file".into());
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.endpoint, "https://movies.example.com/api/identify");
        assert_eq!(loaded.field_name, "file");
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"timeout_seconds": 30}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_load_broken_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ broken").unwrap();

        assert!(matches!(Config::load_from(&path), Err(MovieIdError::JsonParse(_))));
    }

    #[test]
    fn test_set_endpoint_rejects_non_http() {
        let mut config = Config::default();
        assert!(config.set_endpoint("ftp://example.com".into()).is_err());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_upload_config_override() {
        let config = Config::default();
        let upload = config
            .upload_config(Some("http://localhost:9000/api/identify".into()), Some("file".into()))
            .unwrap();
        assert_eq!(upload.endpoint, "http://localhost:9000/api/identify");
        assert_eq!(upload.field_name, "file");
    }

    #[test]
    fn test_upload_config_rejects_non_http_override() {
        let config = Config::default();
        let result = config.upload_config(Some("ftp://x".into()), None);
        assert!(matches!(result, Err(MovieIdError::Config(_))));
    }

    #[test]
    fn test_upload_config_rejects_non_http_file_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"endpoint": "file:///tmp/identify"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        let result = config.upload_config(Some(config.endpoint.clone()), None);
        assert!(matches!(result, Err(MovieIdError::Config(_))));
    }

    #[test]
    fn test_upload_config_rejects_empty_field() {
        let config = Config::default();
        let result = config.upload_config(None, Some(String::new()));
        assert!(matches!(result, Err(MovieIdError::Config(_))));
    }
}
