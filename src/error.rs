use movie_id_common::FlowError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MovieIdError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("パスが見つかりません: {0}")]
    PathNotFound(String),

    #[error("ファイルが指定されていません: {0}")]
    NoFilesGiven(String),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("{}", .0.user_message())]
    Flow(FlowError),
}

impl From<movie_id_common::Error> for MovieIdError {
    fn from(err: movie_id_common::Error) -> Self {
        match err {
            movie_id_common::Error::Json(e) => MovieIdError::JsonParse(e),
            other => MovieIdError::Config(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, MovieIdError>;
