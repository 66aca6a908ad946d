//! Vocab Dashboard Web App (Leptos + WASM)
//!
//! ホストページから呼ぶ関数:
//! - `initDashboard(vocab)`: `#dashboardRoot` にダッシュボードを起動（`#cardsContainer` がなければ何もしない）
//! - `isLoggedIn()`: ログインフラグの有無
//! - `logoutUser()`: フラグを消して入口ページへ

mod app;
mod components;
pub mod bridge;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
}

/// 起動した場合 true
#[wasm_bindgen(js_name = initDashboard)]
pub fn init_dashboard(vocab: JsValue) -> bool {
    let Some(root) = bridge::mount_root() else {
        return false;
    };

    let vocab = bridge::vocab_from_js(vocab);
    gloo::console::log!(format!(
        "vocab dashboard: {}件",
        vocab.as_ref().map(Vec::len).unwrap_or(0)
    ));

    leptos::mount::mount_to(root, move || view! { <App vocab=vocab /> }).forget();
    true
}

#[wasm_bindgen(js_name = isLoggedIn)]
pub fn is_logged_in() -> bool {
    bridge::auth_session().is_logged_in()
}

#[wasm_bindgen(js_name = logoutUser)]
pub fn logout_user() {
    bridge::auth_session().logout_user();
}
