use clap::ValueEnum;
use movie_id_common::config::{DEFAULT_FIELD_NAME, SINGLE_FILE_FIELD_NAME};

/// multipartのフィールド名（サービスの版による）
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum UploadField {
    /// 複数画像版: `images`
    Images,
    /// 単一画像版: `file`
    File,
}

impl UploadField {
    pub fn field_name(&self) -> &'static str {
        match self {
            UploadField::Images => DEFAULT_FIELD_NAME,
            UploadField::File => SINGLE_FILE_FIELD_NAME,
        }
    }
}
