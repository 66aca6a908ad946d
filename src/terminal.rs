//! 端末ブラウザ
//!
//! ブラウザ版と同じコントローラを端末の表示面で動かす。
//! 操作: カードを開く / 検索語を変更 / カテゴリを変更 / 終了

use crate::error::Result;
use crate::tts::CommandSpeech;
use dialoguer::{Input, Select};
use vocab_dashboard_common::{
    categories, Card, DashboardController, DashboardView, DetailView, VocabItem, ALL_CATEGORIES,
};

/// 一覧で一度に見せる行数
const PAGE_ROWS: usize = 15;

/// 端末の表示面
///
/// カード一覧とカテゴリ選択は次の入力で使うため保持しておき、
/// 詳細は開いた時点で出力する。
#[derive(Debug, Default)]
pub struct TerminalView {
    cards: Vec<Card>,
    active_category: String,
    details: Option<DetailView>,
}

impl TerminalView {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn details(&self) -> Option<&DetailView> {
        self.details.as_ref()
    }
}

impl DashboardView for TerminalView {
    fn show_cards(&mut self, cards: &[Card]) {
        self.cards = cards.to_vec();
    }

    fn mark_active_category(&mut self, category: &str) {
        self.active_category = category.to_string();
    }

    fn show_details(&mut self, details: &DetailView) {
        println!("\n{}", format_details(details));
        self.details = Some(details.clone());
    }

    fn hide_details(&mut self) {
        self.details = None;
    }
}

/// 一覧の1行
pub fn format_card(card: &Card) -> String {
    format!("{}  {}  [{}]", card.word, card.translation, card.category)
}

/// 詳細表示
pub fn format_details(details: &DetailView) -> String {
    let mut lines = vec![
        format!("📖 {} ({})", details.word, details.reading),
        format!("  訳: {}", details.translation),
        format!("  品詞: {}", details.part),
    ];
    if !details.collocations.is_empty() {
        lines.push("  組み合わせ:".to_string());
        lines.extend(details.collocations.iter().map(|c| format!("    - {}", c)));
    }
    lines.push(format!("  例文: {}", details.example));
    lines.join("\n")
}

type TerminalController = DashboardController<TerminalView, CommandSpeech>;

/// 対話式で語彙を閲覧
pub fn run_browser(vocab: Vec<VocabItem>, tts_command: Option<String>) -> Result<()> {
    let mut category_items = vec![ALL_CATEGORIES.to_string()];
    category_items.extend(categories(&vocab));

    let speech = CommandSpeech::new(tts_command);
    if !speech.is_available() {
        println!("⚠ 読み上げコマンドが未設定のため音声は再生されません");
    }

    let mut controller = DashboardController::new(Some(vocab), TerminalView::default(), speech);
    let actions = ["カードを開く", "検索語を変更", "カテゴリを変更", "終了"];

    loop {
        let state = controller.state();
        println!(
            "\n[{}] 検索: \"{}\" → {}件",
            state.selected_category,
            state.query,
            controller.view().cards().len()
        );

        let choice = Select::new()
            .with_prompt("操作を選択")
            .items(&actions[..])
            .default(0)
            .interact()?;

        match choice {
            0 => open_card(&mut controller)?,
            1 => {
                let query: String = Input::new()
                    .with_prompt("検索語（空で解除）")
                    .with_initial_text(state.query)
                    .allow_empty(true)
                    .interact_text()?;
                controller.set_query(&query);
            }
            2 => {
                let current = category_items
                    .iter()
                    .position(|c| c == controller.view().active_category())
                    .unwrap_or(0);
                let picked = Select::new()
                    .with_prompt("カテゴリ")
                    .items(&category_items[..])
                    .default(current)
                    .max_length(PAGE_ROWS)
                    .interact()?;
                controller.set_category(&category_items[picked]);
            }
            _ => break,
        }
    }

    controller.close_details();
    Ok(())
}

fn open_card(controller: &mut TerminalController) -> Result<()> {
    let cards = controller.view().cards().to_vec();
    if cards.is_empty() {
        println!("該当するカードがありません");
        return Ok(());
    }

    let labels: Vec<String> = cards.iter().map(format_card).collect();
    let picked = Select::new()
        .with_prompt("カードを選択")
        .items(&labels[..])
        .default(0)
        .max_length(PAGE_ROWS)
        .interact()?;

    controller.open_details(cards[picked].index);

    let detail_actions = ["🔊 読み上げ", "閉じる"];
    loop {
        let action = Select::new()
            .items(&detail_actions[..])
            .default(0)
            .interact()?;
        if action == 0 {
            controller.play_audio();
        } else {
            break;
        }
    }

    controller.close_details();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_card() {
        let card = Card {
            index: 0,
            word: "猫".into(),
            translation: "cat".into(),
            category: "Animals".into(),
        };
        assert_eq!(format_card(&card), "猫  cat  [Animals]");
    }

    #[test]
    fn test_format_details_with_collocations() {
        let details = DetailView {
            word: "本".into(),
            reading: "hon".into(),
            translation: "book".into(),
            part: "noun".into(),
            example: "本を読みます。".into(),
            collocations: vec!["本を読む".into(), "本屋".into()],
        };
        let text = format_details(&details);
        assert!(text.starts_with("📖 本 (hon)"));
        assert!(text.contains("    - 本を読む\n    - 本屋"));
        assert!(text.ends_with("例文: 本を読みます。"));
    }

    #[test]
    fn test_format_details_without_collocations() {
        let details = DetailView {
            word: "犬".into(),
            reading: "inu".into(),
            translation: "dog".into(),
            part: "noun".into(),
            example: String::new(),
            collocations: Vec::new(),
        };
        assert!(!format_details(&details).contains("組み合わせ"));
    }

    #[test]
    fn test_terminal_view_tracks_controller_state() {
        let vocab = vec![
            VocabItem {
                word: "猫".into(),
                translation: "cat".into(),
                category: "Animals".into(),
                ..Default::default()
            },
            VocabItem {
                word: "本".into(),
                translation: "book".into(),
                category: "Objects".into(),
                ..Default::default()
            },
        ];
        let mut controller =
            DashboardController::new(Some(vocab), TerminalView::default(), CommandSpeech::new(None));
        assert_eq!(controller.view().cards().len(), 2);
        assert_eq!(controller.view().active_category(), "All");

        controller.set_category("Objects");
        assert_eq!(controller.view().active_category(), "Objects");
        assert_eq!(controller.view().cards()[0].index, 1);

        controller.open_details(1);
        assert_eq!(controller.view().details().map(|d| d.word.as_str()), Some("本"));
        controller.close_details();
        assert!(controller.view().details().is_none());
    }
}
