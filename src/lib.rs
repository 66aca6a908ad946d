//! 日本語単語カード・ダッシュボード CLI
//!
//! データセット生成・検索と、ブラウザ版と同じコントローラを使う端末ブラウザ

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod generator;
pub mod terminal;
pub mod tts;
