use crate::error::{MovieIdError, Result};
use image::ImageFormat;
use movie_id_common::MediaFile;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 拡張子から判定できない場合のメディアタイプ
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// 送信候補のローカルファイル
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFile {
    pub path: PathBuf,
    pub file_name: String,
    pub media_type: String,
}

impl LocalFile {
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            path: path.to_path_buf(),
            file_name,
            media_type: media_type_for(path),
        }
    }
}

impl MediaFile for LocalFile {
    fn name(&self) -> &str {
        &self.file_name
    }

    fn media_type(&self) -> &str {
        &self.media_type
    }
}

/// 拡張子からメディアタイプを判定
pub fn media_type_for(path: &Path) -> String {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| FALLBACK_MEDIA_TYPE.to_string())
}

/// 引数のパスを送信候補に展開する
///
/// ファイルはそのまま、フォルダは直下（`recursive` なら配下すべて）のファイルを
/// ファイル名順で追加する。画像以外も残し、絞り込みはコントローラが行う。
pub fn collect_files(paths: &[PathBuf], recursive: bool) -> Result<Vec<LocalFile>> {
    let mut files = Vec::new();

    for path in paths {
        if !path.exists() {
            return Err(MovieIdError::PathNotFound(path.display().to_string()));
        }

        if path.is_dir() {
            files.extend(scan_folder(path, recursive));
        } else {
            files.push(LocalFile::from_path(path));
        }
    }

    Ok(files)
}

fn scan_folder(folder: &Path, recursive: bool) -> Vec<LocalFile> {
    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut files: Vec<LocalFile> = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| !e.file_name().to_string_lossy().starts_with('.'))
        .map(|e| LocalFile::from_path(e.path()))
        .collect();

    // ファイル名でソート（再帰時はパス順）
    if recursive {
        files.sort_by(|a, b| a.path.cmp(&b.path));
    } else {
        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    }

    files
}
