//! 語彙データの読み込みとカテゴリ一覧
//!
//! 対応形式:
//! - JSON配列（data/vocab.json）
//! - 静的サイト用スクリプト（static/vocab.js, `const vocab = [...];`）

use crate::error::{Error, Result};
use crate::types::VocabItem;
use std::collections::BTreeSet;

/// スクリプト形式で宣言する変数名
pub const SCRIPT_BINDING: &str = "vocab";

/// JSON配列から読み込み
pub fn parse_vocab_json(json: &str) -> Result<Vec<VocabItem>> {
    let items: Vec<VocabItem> = serde_json::from_str(json)?;
    Ok(items)
}

/// `const vocab = [...];` 形式から読み込み
pub fn parse_vocab_script(script: &str) -> Result<Vec<VocabItem>> {
    let start = script
        .find('[')
        .ok_or_else(|| Error::Format("配列の開始 '[' が見つかりません".into()))?;
    let end = script
        .rfind(']')
        .filter(|&end| end > start)
        .ok_or_else(|| Error::Format("配列の終了 ']' が見つかりません".into()))?;

    parse_vocab_json(&script[start..=end])
}

/// 形式を自動判定して読み込み
pub fn parse_vocab(content: &str) -> Result<Vec<VocabItem>> {
    if content.trim_start().starts_with('[') {
        parse_vocab_json(content)
    } else {
        parse_vocab_script(content)
    }
}

/// 静的サイト用スクリプトを生成
pub fn to_vocab_script(items: &[VocabItem]) -> Result<String> {
    let json = serde_json::to_string_pretty(items)?;
    Ok(format!("const {} = {};\n", SCRIPT_BINDING, json))
}

/// カテゴリ一覧（重複除去・昇順）
pub fn categories(items: &[VocabItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = r#"[
        {"word": "猫", "reading": "neko", "translation": "cat", "category": "Animals"},
        {"word": "本", "reading": "hon", "translation": "book", "category": "Objects",
         "part": "noun", "collocations": ["本を読む"], "example": "本を読みます。"}
    ]"#;

    #[test]
    fn test_parse_vocab_json() {
        let items = parse_vocab_json(SAMPLE_JSON).expect("読み込み失敗");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].word, "猫");
        assert!(items[0].collocations.is_empty());
        assert_eq!(items[1].collocations, vec!["本を読む".to_string()]);
    }

    #[test]
    fn test_parse_vocab_json_null_collocations() {
        let json = r#"[
            {"word": "猫", "reading": "neko", "translation": "cat", "collocations": null},
            {"word": "本", "reading": "hon", "translation": "book", "collocations": ["本を読む"]}
        ]"#;
        let items = parse_vocab_json(json).expect("null の組み合わせで全体が読めない");
        assert_eq!(items.len(), 2);
        assert!(items[0].collocations.is_empty());
        assert_eq!(items[1].collocations, vec!["本を読む".to_string()]);
    }

    #[test]
    fn test_parse_vocab_json_invalid() {
        let result = parse_vocab_json("{not an array");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_parse_vocab_script() {
        let script = format!("const vocab = {};\n", SAMPLE_JSON);
        let items = parse_vocab_script(&script).expect("読み込み失敗");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].word, "本");
    }

    #[test]
    fn test_parse_vocab_script_without_array() {
        let result = parse_vocab_script("const vocab = undefined;");
        assert!(matches!(result, Err(Error::Format(_))));
    }

    #[test]
    fn test_parse_vocab_detects_format() {
        assert_eq!(parse_vocab(SAMPLE_JSON).unwrap().len(), 2);
        let script = format!("const vocab = {};", SAMPLE_JSON);
        assert_eq!(parse_vocab(&script).unwrap().len(), 2);
    }

    #[test]
    fn test_script_is_readable_back() {
        let items = parse_vocab_json(SAMPLE_JSON).unwrap();
        let script = to_vocab_script(&items).expect("生成失敗");
        assert!(script.starts_with("const vocab = ["));
        assert!(script.trim_end().ends_with("];"));
        assert_eq!(parse_vocab_script(&script).unwrap(), items);
    }

    #[test]
    fn test_categories_sorted_and_unique() {
        let items: Vec<VocabItem> = ["Travel", "Animals", "Travel", "Greetings", "Animals"]
            .iter()
            .map(|c| VocabItem {
                category: c.to_string(),
                ..Default::default()
            })
            .collect();

        assert_eq!(categories(&items), vec!["Animals", "Greetings", "Travel"]);
    }

    #[test]
    fn test_categories_empty() {
        assert!(categories(&[]).is_empty());
    }
}
