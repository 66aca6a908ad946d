//! 語彙データ生成モジュール
//!
//! 組み込みの基本語彙を複製し、複製ごとにカテゴリを巡回させて
//! 指定件数（既定1000件）のデータセットを作る。
//! 出力:
//! - data/vocab.json: JSON配列
//! - static/vocab.js: 静的サイトで読み込むスクリプト

use crate::error::Result;
use std::path::{Path, PathBuf};
use vocab_dashboard_common::{parse_vocab_json, to_vocab_script, VocabItem};

const BASE_ENTRIES_JSON: &str = include_str!("../data/base_entries.json");

/// 複製時に巡回させるカテゴリ
pub const CATEGORIES: [&str; 30] = [
    "Greetings", "Daily Life", "Food & Drink", "Travel", "Shopping",
    "Office", "Health", "Family", "Emotions", "Fitness", "Leisure",
    "Technology", "Education", "Weather", "Hobbies", "Home", "Directions",
    "Numbers", "Nature", "Animals", "Time", "Finance", "Grocery", "Tourism",
    "Medical", "Social", "Business", "Media", "Hotel", "Misc",
];

/// 組み込みの基本語彙
pub fn base_entries() -> Result<Vec<VocabItem>> {
    Ok(parse_vocab_json(BASE_ENTRIES_JSON)?)
}

/// 基本語彙を複製して `target` 件のデータセットを作る
///
/// 各基本語彙を `ceil(target / base.len())` 回ずつ複製し、
/// 1からの連番IDとカテゴリを振り直す。
pub fn generate(base: &[VocabItem], target: usize) -> Vec<VocabItem> {
    if base.is_empty() || target == 0 {
        return Vec::new();
    }

    let factor = target.div_ceil(base.len());
    let mut entries = Vec::with_capacity(target);

    'outer: for (i, entry) in base.iter().enumerate() {
        for j in 0..factor {
            if entries.len() >= target {
                break 'outer;
            }
            let mut copy = entry.clone();
            copy.id = Some(entries.len() as u32 + 1);
            copy.category = CATEGORIES[(i * factor + j) % CATEGORIES.len()].to_string();
            entries.push(copy);
        }
    }

    entries
}

/// 出力先ファイル
#[derive(Debug, Clone)]
pub struct GeneratedFiles {
    pub json_path: PathBuf,
    pub script_path: PathBuf,
}

/// data/vocab.json と static/vocab.js を書き出す
pub fn write_dataset(entries: &[VocabItem], out_dir: &Path) -> Result<GeneratedFiles> {
    let data_dir = out_dir.join("data");
    let static_dir = out_dir.join("static");
    std::fs::create_dir_all(&data_dir)?;
    std::fs::create_dir_all(&static_dir)?;

    let json_path = data_dir.join("vocab.json");
    std::fs::write(&json_path, serde_json::to_string_pretty(entries)?)?;

    let script_path = static_dir.join("vocab.js");
    std::fs::write(&script_path, to_vocab_script(entries)?)?;

    tracing::debug!(
        json = %json_path.display(),
        script = %script_path.display(),
        count = entries.len(),
        "dataset written"
    );

    Ok(GeneratedFiles { json_path, script_path })
}
