//! 語彙データファイルの読み込み

use crate::error::{Result, VocabError};
use std::path::Path;
use vocab_dashboard_common::{parse_vocab, VocabItem};

/// vocab.json / vocab.js を読み込む
pub fn load_vocab(path: &Path) -> Result<Vec<VocabItem>> {
    if !path.exists() {
        return Err(VocabError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let items = parse_vocab(&content)?;
    tracing::debug!(path = %path.display(), count = items.len(), "vocab loaded");
    Ok(items)
}
