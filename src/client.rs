//! 識別サービスへのmultipart送信

use crate::error::Result;
use crate::scanner::LocalFile;
use movie_id_common::{classify, FlowError, FlowOutcome, UploadConfig};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

pub struct IdentifyClient {
    http: reqwest::Client,
    config: UploadConfig,
    verbose: bool,
}

impl IdentifyClient {
    pub fn new(config: UploadConfig, timeout: Duration, verbose: bool) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, config, verbose })
    }

    /// ファイルを送信し、結果を分類する
    ///
    /// 送信時の失敗（接続・読み込み・タイムアウト）はすべてTransportになる。
    pub async fn identify(&self, files: &[LocalFile]) -> FlowOutcome {
        match self.post_files(files).await {
            Ok((status, body)) => {
                if self.verbose {
                    println!("  [identify] status {} / {} bytes", status, body.len());
                }
                classify(status, &body)
            }
            Err(e) => {
                if self.verbose {
                    eprintln!("  [identify] 送信失敗: {}", e);
                }
                Err(FlowError::Transport(e.to_string()))
            }
        }
    }

    async fn post_files(&self, files: &[LocalFile]) -> Result<(u16, String)> {
        let mut form = Form::new();

        for file in files {
            let bytes = tokio::fs::read(&file.path).await?;
            let part = Part::bytes(bytes)
                .file_name(file.file_name.clone())
                .mime_str(&file.media_type)?;
            form = form.part(self.config.field_name.clone(), part);
        }

        if self.verbose {
            println!(
                "  [identify] POST {} ({} parts, field \"{}\")",
                self.config.endpoint,
                files.len(),
                self.config.field_name
            );
        }

        let response = self
            .http
            .post(&self.config.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }
}
