//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use movie_id::error::MovieIdError;
use movie_id::scanner;
use movie_id_common::FlowError;
use std::path::PathBuf;
use tempfile::tempdir;

/// 存在しないパスを指定した場合
#[test]
fn test_collect_nonexistent_path() {
    let result = scanner::collect_files(&[PathBuf::from("/nonexistent/path/12345")], false);
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, MovieIdError::PathNotFound(_)));
}

/// 空のフォルダを指定した場合
#[test]
fn test_collect_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::collect_files(&[dir.path().to_path_buf()], false);

    // 空フォルダはエラーではなく空のVecを返す
    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

/// 画像のないフォルダ: ファイルは収集されるが画像ではない
#[test]
fn test_collect_folder_no_images() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("test.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("data.json"), "{}").unwrap();

    let files = scanner::collect_files(&[dir.path().to_path_buf()], false).unwrap();
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| !movie_id_common::is_image_type(&f.media_type)));
}

/// MovieIdErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        MovieIdError::Config("テスト設定エラー".to_string()),
        MovieIdError::PathNotFound("shot.png".to_string()),
        MovieIdError::NoFilesGiven("shots/".to_string()),
        MovieIdError::Flow(FlowError::Validation),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// フローエラーはユーザー向け文言で表示される
#[test]
fn test_flow_error_uses_user_message() {
    let err = MovieIdError::Flow(FlowError::Service {
        status: 400,
        detail: Some("File must be an image".to_string()),
    });
    assert_eq!(format!("{}", err), "File must be an image");

    let err = MovieIdError::Flow(FlowError::Transport("connection refused".to_string()));
    assert_eq!(format!("{}", err), "Something went wrong on our end. Please try again.");
}

/// 共通ライブラリのエラー変換
#[test]
fn test_from_common_error() {
    let err: MovieIdError = movie_id_common::Error::Config("endpoint is empty".to_string()).into();
    assert!(matches!(err, MovieIdError::Config(_)));

    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: MovieIdError = movie_id_common::Error::Json(json_error).into();
    assert!(matches!(err, MovieIdError::JsonParse(_)));
}

/// IOエラーからの変換
#[test]
fn test_from_io_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
    let err: MovieIdError = io_error.into();
    assert!(matches!(err, MovieIdError::Io(_)));
    assert!(format!("{}", err).contains("access denied"));
}
