//! ブラウザの File をコントローラで扱えるようにする

use movie_id_common::MediaFile;
use web_sys::{File, FileList};

/// 選択されたファイル（JS側のハンドルを保持）
#[derive(Clone, Debug)]
pub struct WebFile {
    name: String,
    media_type: String,
    file: File,
}

impl WebFile {
    pub fn new(file: File) -> Self {
        Self {
            name: file.name(),
            media_type: file.type_(),
            file,
        }
    }

    pub fn file(&self) -> &File {
        &self.file
    }
}

impl MediaFile for WebFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn media_type(&self) -> &str {
        &self.media_type
    }
}

/// FileList を選択順のまま Vec にする
pub fn files_from_list(list: &FileList) -> Vec<WebFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(WebFile::new)
        .collect()
}
