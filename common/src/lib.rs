//! Movie ID Common Library
//!
//! CLIとWeb(WASM)で共有されるアップロード状態機械・型・表示モデル

pub mod config;
pub mod controller;
pub mod error;
pub mod files;
pub mod render;
pub mod response;
pub mod state;
pub mod types;

pub use config::{CaptionStage, UploadConfig, CAPTION_SCHEDULE, DEFAULT_CAPTION};
pub use controller::{FlowId, FlowTicket, UploadController};
pub use error::{Error, FlowError, Result};
pub use files::{is_image_type, MediaFile, PendingFiles};
pub use render::{confidence_percent, display_domain, LinkView, LinksView, ResultView};
pub use response::{classify, FlowOutcome, IdentifyResponse};
pub use state::{Panel, UploadState};
pub use types::{IdentificationResult, StreamingLink};
