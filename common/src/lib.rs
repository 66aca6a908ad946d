//! Vocab Dashboard Common Library
//!
//! CLIとWeb(WASM)で共有される型・フィルタ・コントローラ

pub mod types;
pub mod error;
pub mod filter;
pub mod catalog;
pub mod view;
pub mod speech;
pub mod auth;
pub mod controller;

pub use types::{Card, DetailView, VocabItem};
pub use error::{Error, Result};
pub use filter::{Filter, ALL_CATEGORIES};
pub use catalog::{categories, parse_vocab, parse_vocab_json, parse_vocab_script, to_vocab_script};
pub use view::DashboardView;
pub use speech::{SpeechProvider, JAPANESE_LOCALE};
pub use auth::{AccessForm, AuthSession, FlagStore, Navigator, ACCESS_CODE, LANDING_PAGE, LOGIN_FLAG_KEY};
pub use controller::{DashboardController, DashboardState};
