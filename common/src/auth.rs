//! ログイン状態の管理
//!
//! ログイン状態は永続ストレージ上の単一フラグ（キー: `loggedIn`）の有無で表す。
//! 登録時は購入コードを確認してからフラグを立てる。

use crate::error::{Error, Result};

/// ログインフラグのキー
pub const LOGIN_FLAG_KEY: &str = "loggedIn";

/// ログアウト後の遷移先
pub const LANDING_PAGE: &str = "index.html";

/// 購入時に配布されるアクセスコード
pub const ACCESS_CODE: &str = "ACCESS2025";

/// ログインフラグの保存先
pub trait FlagStore {
    fn get_flag(&self) -> Option<String>;
    fn set_flag(&mut self, value: &str);
    fn clear_flag(&mut self);
}

/// ページ遷移
pub trait Navigator {
    fn navigate(&mut self, location: &str);
}

/// 登録フォームの入力
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessForm {
    pub username: String,
    pub code: String,
}

impl AccessForm {
    pub fn new(username: &str, code: &str) -> Self {
        Self {
            username: username.to_string(),
            code: code.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() || self.code.trim().is_empty() {
            return Err(Error::Access("Please fill in all fields.".into()));
        }
        if self.code.trim() != ACCESS_CODE {
            return Err(Error::Access(
                "Invalid purchase code. Please enter the correct code from your purchase receipt."
                    .into(),
            ));
        }
        Ok(())
    }
}

/// ログイン状態
pub struct AuthSession<S, N> {
    store: S,
    navigator: N,
}

impl<S: FlagStore, N: Navigator> AuthSession<S, N> {
    pub fn new(store: S, navigator: N) -> Self {
        Self { store, navigator }
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.get_flag().is_some()
    }

    /// フォームを検証してログインフラグを立てる
    pub fn login(&mut self, form: &AccessForm) -> Result<()> {
        form.validate()?;
        self.store.set_flag("true");
        tracing::debug!(username = form.username.trim(), "logged in");
        Ok(())
    }

    /// フラグを消して入口ページへ遷移する
    pub fn logout_user(&mut self) {
        self.store.clear_flag();
        self.navigator.navigate(LANDING_PAGE);
    }
}
