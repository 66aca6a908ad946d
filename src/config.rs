use crate::error::{Result, VocabError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 語彙データの場所を上書きする環境変数
pub const DATA_ENV: &str = "VOCAB_DATA";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 語彙データ（vocab.json / vocab.js）
    pub data_path: Option<PathBuf>,
    /// 端末ブラウザで使う読み上げコマンド（`{locale}` は言語タグに置換）
    pub tts_command: Option<String>,
    /// generate で作る件数
    pub entry_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            tts_command: None,
            entry_count: 1000,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| VocabError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("vocab-dashboard").join("config.json"))
    }

    /// 語彙データの場所（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_data_path(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path);
        }

        if let Ok(path) = std::env::var(DATA_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        self.data_path.clone().ok_or(VocabError::MissingDataPath)
    }
}
