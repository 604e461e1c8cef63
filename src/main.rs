use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use movie_id::{cli, client, config, error, flow, output, scanner};
use movie_id_common::{FlowError, ResultView, UploadController, UploadState};
use cli::{Cli, Commands};
use client::IdentifyClient;
use config::Config;
use error::{MovieIdError, Result};
use std::time::Duration;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}", output::format_error(&e.to_string()));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Identify { paths, endpoint, field, recursive, json } => {
            let upload = config.upload_config(endpoint, field.map(|f| f.field_name().to_string()))?;

            // 1. ファイル収集
            let files = scanner::collect_files(&paths, recursive)?;
            if files.is_empty() {
                return Err(MovieIdError::NoFilesGiven(
                    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", "),
                ));
            }
            if cli.verbose {
                println!("✔ {}件のファイルを検出", files.len());
            }

            // 2. 検証してLoadingへ（画像がなければここで終わる）
            let mut controller = UploadController::new();
            let Some(ticket) = controller.begin_upload(files) else {
                let error = controller.error().cloned().unwrap_or(FlowError::Validation);
                return Err(MovieIdError::Flow(error));
            };

            // 3. 送信
            let client = IdentifyClient::new(
                upload,
                Duration::from_secs(config.timeout_seconds),
                cli.verbose,
            )?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner());
            spinner.set_message(controller.caption().to_string());
            spinner.enable_steady_tick(Duration::from_millis(100));

            let send_files = ticket.files().to_vec();
            flow::drive(&mut controller, ticket, client.identify(&send_files), |caption| {
                spinner.set_message(caption.to_string())
            })
            .await;
            spinner.finish_and_clear();

            // 4. 結果表示
            match controller.state() {
                UploadState::Result(result) if json => {
                    println!("{}", serde_json::to_string_pretty(result)?);
                }
                UploadState::Result(result) => {
                    let view = ResultView::from_result(result);
                    if cli.verbose {
                        for skipped in &view.skipped_links {
                            eprintln!("  リンクを表示できません: {}", skipped);
                        }
                    }
                    println!("{}", output::format_result(&view));
                }
                UploadState::Error(error) => {
                    if cli.verbose {
                        eprintln!("  原因: {}", error);
                    }
                    return Err(MovieIdError::Flow(error.clone()));
                }
                UploadState::Idle | UploadState::Loading => {}
            }
        }

        Commands::Config { set_endpoint, set_field, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                changed = true;
            }

            if let Some(field) = set_field {
                config.set_field_name(field.field_name().to_string());
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint);
                println!("  フィールド名: {}", config.field_name);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                if let Ok(env) = std::env::var(config::ENDPOINT_ENV) {
                    println!("  ({} = {} が優先されます)", config::ENDPOINT_ENV, env);
                }
            }
        }
    }

    Ok(())
}
