use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("語彙データが指定されていません。`vocab-dashboard config --set-data PATH` か環境変数 VOCAB_DATA で指定してください")]
    MissingDataPath,

    #[error("語彙データの読み込みに失敗: {0}")]
    Data(#[from] vocab_dashboard_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, VocabError>;
