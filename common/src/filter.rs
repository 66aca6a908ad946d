//! 検索・カテゴリ絞り込み
//!
//! 一覧の表示対象は常に「カテゴリ一致 かつ 検索語一致」の全件。
//! 差分更新はせず、状態が変わるたびに先頭から走査し直す。

use crate::types::VocabItem;

/// カテゴリで絞り込まないことを表す番兵値
pub const ALL_CATEGORIES: &str = "All";

/// 絞り込み条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// 正規化済み（前後空白除去・小文字化）の検索語
    query: String,
    category: String,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl Filter {
    pub fn new(query: &str, category: &str) -> Self {
        Self {
            query: normalize_query(query),
            category: category.to_string(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_query(&mut self, text: &str) {
        self.query = normalize_query(text);
    }

    pub fn set_category(&mut self, category: &str) {
        self.category = category.to_string();
    }

    /// カテゴリ一致（大文字小文字を区別する完全一致）
    pub fn matches_category(&self, item: &VocabItem) -> bool {
        self.category == ALL_CATEGORIES || item.category == self.category
    }

    /// 表記・読み・訳のいずれかに検索語を含むか（大文字小文字を区別しない）
    pub fn matches_search(&self, item: &VocabItem) -> bool {
        if self.query.is_empty() {
            return true;
        }
        [&item.word, &item.reading, &item.translation]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.query))
    }

    pub fn matches(&self, item: &VocabItem) -> bool {
        self.matches_category(item) && self.matches_search(item)
    }

    /// 表示対象の位置を元の順序のまま返す
    pub fn visible_indices(&self, items: &[VocabItem]) -> Vec<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.matches(item))
            .map(|(i, _)| i)
            .collect()
    }

    /// 表示対象を元の順序のまま返す
    pub fn apply<'a>(&self, items: &'a [VocabItem]) -> Vec<&'a VocabItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// 検索語の正規化
pub fn normalize_query(text: &str) -> String {
    text.trim().to_lowercase()
}
