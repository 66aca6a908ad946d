//! ブラウザAPIとの接続
//!
//! コントローラが使う抽象（表示面・音声合成・ログインフラグ・ページ遷移）を
//! Leptosシグナル, Web Speech, localStorage, window.location で実装する。

use leptos::prelude::*;
use vocab_dashboard_common::{
    AuthSession, Card, DashboardView, DetailView, FlagStore, Navigator, SpeechProvider, VocabItem,
    LOGIN_FLAG_KEY,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, SpeechSynthesis, SpeechSynthesisUtterance, Storage};

/// ダッシュボードを置くページの目印。存在しないページでは起動しない。
pub const CARDS_CONTAINER_ID: &str = "cardsContainer";

/// アプリをマウントする要素のID
pub const DASHBOARD_ROOT_ID: &str = "dashboardRoot";

/// マウント先を用意する
///
/// `#cardsContainer` がなければ None。`#dashboardRoot` があればそれを使い、
/// なければコンテナの直前に作る。コンテナ自体には描画しない。
pub fn mount_root() -> Option<HtmlElement> {
    let document = web_sys::window()?.document()?;
    let container = document.get_element_by_id(CARDS_CONTAINER_ID)?;

    if let Some(root) = document.get_element_by_id(DASHBOARD_ROOT_ID) {
        return root.dyn_into::<HtmlElement>().ok();
    }

    let root = document.create_element("div").ok()?;
    root.set_id(DASHBOARD_ROOT_ID);
    if let Err(e) = container.before_with_node_1(&root) {
        gloo::console::warn!("マウント先を作れません", e);
        return None;
    }
    root.dyn_into::<HtmlElement>().ok()
}

/// ホストページから渡された語彙データを読み込む
///
/// 未定義なら None、形式が違えば警告を出して None。
pub fn vocab_from_js(value: JsValue) -> Option<Vec<VocabItem>> {
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value(value) {
        Ok(items) => Some(items),
        Err(e) => {
            gloo::console::warn!(format!("語彙データを読み込めません: {}", e));
            None
        }
    }
}

/// シグナルに書き込む表示面
#[derive(Clone, Copy)]
pub struct SignalView {
    pub cards: WriteSignal<Vec<Card>>,
    pub active_category: WriteSignal<String>,
    pub details: WriteSignal<Option<DetailView>>,
}

impl DashboardView for SignalView {
    fn show_cards(&mut self, cards: &[Card]) {
        self.cards.set(cards.to_vec());
    }

    fn mark_active_category(&mut self, category: &str) {
        self.active_category.set(category.to_string());
    }

    fn show_details(&mut self, details: &DetailView) {
        self.details.set(Some(details.clone()));
    }

    fn hide_details(&mut self) {
        self.details.set(None);
    }
}

/// Web Speech API による読み上げ
pub struct WebSpeech {
    synth: Option<SpeechSynthesis>,
}

impl WebSpeech {
    pub fn new() -> Self {
        let synth = web_sys::window().and_then(|w| w.speech_synthesis().ok());
        if synth.is_none() {
            gloo::console::warn!("speechSynthesis が利用できません");
        }
        Self { synth }
    }
}

impl Default for WebSpeech {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechProvider for WebSpeech {
    fn speak(&mut self, text: &str, locale: &str) {
        let Some(synth) = &self.synth else {
            return;
        };
        match SpeechSynthesisUtterance::new_with_text(text) {
            Ok(utterance) => {
                utterance.set_lang(locale);
                synth.speak(&utterance);
            }
            Err(e) => gloo::console::warn!("読み上げ失敗", e),
        }
    }

    fn cancel(&mut self) {
        if let Some(synth) = &self.synth {
            synth.cancel();
        }
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// localStorage 上のログインフラグ
#[derive(Clone, Copy, Default)]
pub struct LocalFlagStore;

impl FlagStore for LocalFlagStore {
    fn get_flag(&self) -> Option<String> {
        local_storage().and_then(|s| s.get_item(LOGIN_FLAG_KEY).ok().flatten())
    }

    fn set_flag(&mut self, value: &str) {
        if let Some(s) = local_storage() {
            let _ = s.set_item(LOGIN_FLAG_KEY, value);
        }
    }

    fn clear_flag(&mut self) {
        if let Some(s) = local_storage() {
            let _ = s.remove_item(LOGIN_FLAG_KEY);
        }
    }
}

/// window.location による遷移
#[derive(Clone, Copy, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn navigate(&mut self, location: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(location);
        }
    }
}

pub type BrowserAuth = AuthSession<LocalFlagStore, WindowNavigator>;

pub fn auth_session() -> BrowserAuth {
    AuthSession::new(LocalFlagStore, WindowNavigator)
}
