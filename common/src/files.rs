//! 選択ファイルの抽象化
//!
//! ブラウザの `File` とローカルファイルを同じ扱いにするためのトレイト

/// メディアタイプを持つファイルハンドル
pub trait MediaFile {
    fn name(&self) -> &str;
    fn media_type(&self) -> &str;

    fn is_image(&self) -> bool {
        is_image_type(self.media_type())
    }
}

/// `image/` で始まるメディアタイプか（大文字小文字は区別しない）
pub fn is_image_type(media_type: &str) -> bool {
    media_type
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

/// ユーザーが選択したファイル（選択順を保持）
#[derive(Debug, Clone)]
pub struct PendingFiles<F> {
    files: Vec<F>,
}

impl<F> Default for PendingFiles<F> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<F: MediaFile + Clone> PendingFiles<F> {
    pub fn new(files: Vec<F>) -> Self {
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// 画像のみを選択順のまま抽出
    pub fn images(&self) -> Vec<F> {
        self.files.iter().filter(|f| f.is_image()).cloned().collect()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}
