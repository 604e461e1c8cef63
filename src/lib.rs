//! Movie ID - スクリーンショット識別クライアント
//!
//! ブラウザ版と同じ状態機械（movie_id_common）をターミナルから駆動する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod flow;
pub mod output;
pub mod scanner;
pub mod upload_field;
