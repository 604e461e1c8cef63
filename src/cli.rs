use clap::{Parser, Subcommand};
use crate::upload_field::UploadField;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "movie-id")]
#[command(about = "スクリーンショットから映画・番組を識別", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// スクリーンショットを送信して識別結果を表示
    Identify {
        /// 画像ファイルまたはフォルダ（複数可）
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// 識別サービスのURL（設定より優先）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// multipartフィールド名 (images/file)
        #[arg(short, long)]
        field: Option<UploadField>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,

        /// 識別結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 識別サービスのURLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// multipartフィールド名を設定
        #[arg(long)]
        set_field: Option<UploadField>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
