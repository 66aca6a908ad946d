//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::bridge::{auth_session, SignalView, WebSpeech};
use crate::components::{
    header::Header,
    login_form::LoginForm,
    search_bar::SearchBar,
    category_bar::CategoryBar,
    card_grid::CardGrid,
    details_modal::DetailsModal,
};
use vocab_dashboard_common::{
    categories, AccessForm, Card, DashboardController, DetailView, VocabItem, ALL_CATEGORIES,
};

/// ログイン前はアクセスフォーム、ログイン後はダッシュボード
#[component]
pub fn App(vocab: Option<Vec<VocabItem>>) -> impl IntoView {
    let (logged_in, set_logged_in) = signal(auth_session().is_logged_in());
    let (login_error, set_login_error) = signal(None::<String>);
    let vocab = StoredValue::new(vocab);

    let on_login = move |form: AccessForm| match auth_session().login(&form) {
        Ok(()) => {
            set_login_error.set(None);
            set_logged_in.set(true);
        }
        Err(e) => set_login_error.set(Some(e.to_string())),
    };

    let on_logout = move |_: ()| {
        auth_session().logout_user();
        set_logged_in.set(false);
    };

    view! {
        <Show
            when=move || logged_in.get()
            fallback=move || view! { <LoginForm error=login_error on_login=on_login /> }
        >
            <Header on_logout=on_logout />
            <Dashboard vocab=vocab.get_value() />
        </Show>
    }
}

/// 検索欄・カテゴリ・カード一覧・詳細モーダル
#[component]
fn Dashboard(vocab: Option<Vec<VocabItem>>) -> impl IntoView {
    let (cards, set_cards) = signal(Vec::<Card>::new());
    let (active_category, set_active_category) = signal(ALL_CATEGORIES.to_string());
    let (details, set_details) = signal(None::<DetailView>);

    let mut category_labels = vec![ALL_CATEGORIES.to_string()];
    category_labels.extend(categories(vocab.as_deref().unwrap_or_default()));

    let signal_view = SignalView {
        cards: set_cards,
        active_category: set_active_category,
        details: set_details,
    };
    let controller = StoredValue::new_local(DashboardController::new(vocab, signal_view, WebSpeech::new()));

    let on_query = move |text: String| {
        controller.update_value(|c| c.set_query(&text));
    };
    let on_category = move |category: String| {
        controller.update_value(|c| c.set_category(&category));
    };
    let on_open = move |index: usize| {
        controller.update_value(|c| c.open_details(index));
    };
    let on_play = move |_: ()| {
        controller.update_value(|c| c.play_audio());
    };
    let on_close = move |_: ()| {
        controller.update_value(|c| c.close_details());
    };
    let on_outside = move |_: ()| {
        controller.update_value(|c| c.click_outside());
    };

    view! {
        <div class="dashboard">
            <SearchBar on_query=on_query />
            <CategoryBar
                categories=category_labels
                active=active_category
                on_select=on_category
            />
            <CardGrid cards=cards on_open=on_open />
            <DetailsModal
                details=details
                on_play=on_play
                on_close=on_close
                on_outside=on_outside
            />
        </div>
    }
}
