//! 表示面の抽象
//!
//! コントローラは具体的な描画先（DOM, 端末など）を知らない。
//! 描画先が持たない領域（詳細欄の一部など）は実装側で黙って読み飛ばす。

use crate::types::{Card, DetailView};

pub trait DashboardView {
    /// カード一覧を丸ごと置き換える
    fn show_cards(&mut self, cards: &[Card]);

    /// 指定カテゴリのボタンだけを選択状態にする
    fn mark_active_category(&mut self, category: &str);

    /// 詳細モーダルを表示
    fn show_details(&mut self, details: &DetailView);

    /// 詳細モーダルを閉じる
    fn hide_details(&mut self);
}
