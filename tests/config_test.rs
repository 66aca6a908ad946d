//! 設定ファイルテスト

use std::path::PathBuf;
use tempfile::tempdir;
use vocab_dashboard::config::Config;

/// 設定ファイルがなければ既定値
#[test]
fn test_load_missing_config_returns_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");

    assert_eq!(config, Config::default());
    assert_eq!(config.entry_count, 1000);
    assert!(config.data_path.is_none());
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        data_path: Some(PathBuf::from("/srv/data/vocab.json")),
        tts_command: Some("espeak-ng -v {locale}".to_string()),
        entry_count: 200,
    };
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded, config);
}

/// 一部の項目だけの設定ファイル
#[test]
fn test_partial_config_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"tts_command": "say"}"#).unwrap();

    let config = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(config.tts_command.as_deref(), Some("say"));
    assert_eq!(config.entry_count, 1000);
}

/// 引数で指定したパスが最優先
#[test]
fn test_explicit_data_path_wins() {
    let config = Config {
        data_path: Some(PathBuf::from("from-config.json")),
        ..Default::default()
    };
    let resolved = config
        .resolve_data_path(Some(PathBuf::from("from-arg.json")))
        .expect("解決失敗");
    assert_eq!(resolved, PathBuf::from("from-arg.json"));
}
