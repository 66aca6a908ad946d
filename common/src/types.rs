//! 語彙データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - VocabItem: 語彙データ1件（入力）
//! - Card: 一覧に表示するカード
//! - DetailView: 詳細モーダルに表示する内容

use serde::{Deserialize, Deserializer, Serialize};

/// カテゴリ未設定時の既定値
pub const DEFAULT_CATEGORY: &str = "Misc";

/// 語彙データ1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabItem {
    /// 生成スクリプトが振る連番（手書きデータでは省略可）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub word: String,             // 表記
    pub reading: String,          // ローマ字読み
    pub translation: String,      // 訳
    pub category: String,         // カテゴリ
    pub part: String,             // 品詞
    #[serde(deserialize_with = "null_as_empty")]
    pub collocations: Vec<String>, // よく使う組み合わせ
    pub example: String,          // 例文
}

/// `null` は空リストとして読む
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for VocabItem {
    fn default() -> Self {
        Self {
            id: None,
            word: String::new(),
            reading: String::new(),
            translation: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            part: String::new(),
            collocations: Vec::new(),
            example: String::new(),
        }
    }
}

/// 一覧に表示するカード
///
/// `index` は読み込んだ語彙リスト内の位置。クリック時にこの位置で詳細を開く。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub index: usize,
    pub word: String,
    pub translation: String,
    pub category: String,
}

impl Card {
    pub fn new(index: usize, item: &VocabItem) -> Self {
        Self {
            index,
            word: item.word.clone(),
            translation: item.translation.clone(),
            category: item.category.clone(),
        }
    }
}

/// 詳細モーダルの表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub word: String,
    pub reading: String,
    pub translation: String,
    pub part: String,
    pub example: String,
    pub collocations: Vec<String>,
}

impl From<&VocabItem> for DetailView {
    fn from(item: &VocabItem) -> Self {
        Self {
            word: item.word.clone(),
            reading: item.reading.clone(),
            translation: item.translation.clone(),
            part: item.part.clone(),
            example: item.example.clone(),
            collocations: item.collocations.clone(),
        }
    }
}
