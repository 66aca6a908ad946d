//! ダッシュボードのコントローラ
//!
//! 状態（検索語・選択カテゴリ・詳細表示中の項目）を持ち、
//! 状態が変わるたびに表示対象を全件から導き直して描画先へ渡す。
//! 描画先と音声合成は注入されるため、ブラウザなしで動作確認できる。

use crate::filter::{Filter, ALL_CATEGORIES};
use crate::speech::{SpeechProvider, JAPANESE_LOCALE};
use crate::types::{Card, DetailView, VocabItem};
use crate::view::DashboardView;

/// 画面状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub query: String,
    pub selected_category: String,
    /// 詳細表示中の項目の位置（閉じている間は None）
    pub active_item: Option<usize>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            query: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
            active_item: None,
        }
    }
}

pub struct DashboardController<V, S> {
    vocab: Vec<VocabItem>,
    filter: Filter,
    active_item: Option<usize>,
    view: V,
    speech: S,
}

impl<V: DashboardView, S: SpeechProvider> DashboardController<V, S> {
    /// 語彙データがなければ空リストとして扱う
    pub fn new(vocab: Option<Vec<VocabItem>>, view: V, speech: S) -> Self {
        let mut controller = Self {
            vocab: vocab.unwrap_or_default(),
            filter: Filter::default(),
            active_item: None,
            view,
            speech,
        };
        controller.view.mark_active_category(ALL_CATEGORIES);
        controller.render();
        controller
    }

    pub fn state(&self) -> DashboardState {
        DashboardState {
            query: self.filter.query().to_string(),
            selected_category: self.filter.category().to_string(),
            active_item: self.active_item,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn active_item(&self) -> Option<&VocabItem> {
        self.active_item.and_then(|i| self.vocab.get(i))
    }

    pub fn set_query(&mut self, text: &str) {
        self.filter.set_query(text);
        self.render();
    }

    pub fn set_category(&mut self, category: &str) {
        self.filter.set_category(category);
        self.view.mark_active_category(category);
        self.render();
    }

    /// 現在の条件で表示対象のカードを求める（描画先には触れない）
    pub fn visible_cards(&self) -> Vec<Card> {
        self.filter
            .visible_indices(&self.vocab)
            .into_iter()
            .map(|i| Card::new(i, &self.vocab[i]))
            .collect()
    }

    /// カード一覧を描き直す
    pub fn render(&mut self) -> Vec<Card> {
        let cards = self.visible_cards();
        tracing::debug!(
            query = self.filter.query(),
            category = self.filter.category(),
            visible = cards.len(),
            total = self.vocab.len(),
            "render cards"
        );
        self.view.show_cards(&cards);
        cards
    }

    /// 範囲外の位置は無視する
    pub fn open_details(&mut self, index: usize) {
        let Some(item) = self.vocab.get(index) else {
            tracing::debug!(index, "open_details: no such item");
            return;
        };
        let details = DetailView::from(item);
        self.active_item = Some(index);
        self.view.show_details(&details);
        tracing::debug!(index, word = %details.word, "details opened");
    }

    /// 詳細表示中の語を日本語で読み上げる
    pub fn play_audio(&mut self) {
        let Some(word) = self.active_item().map(|item| item.word.clone()) else {
            return;
        };
        tracing::trace!(%word, "speak");
        self.speech.speak(&word, JAPANESE_LOCALE);
    }

    /// 詳細を閉じ、読み上げを取り消す。閉じていれば何もしない。
    pub fn close_details(&mut self) {
        if self.active_item.take().is_none() {
            return;
        }
        self.view.hide_details();
        self.speech.cancel();
        tracing::debug!("details closed");
    }

    /// モーダル外側のクリック
    pub fn click_outside(&mut self) {
        self.close_details();
    }
}
