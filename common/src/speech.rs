//! 音声合成の抽象

/// 読み上げに付ける言語タグ
pub const JAPANESE_LOCALE: &str = "ja-JP";

/// 音声合成の提供元
///
/// どちらの操作も完了を待たない。
pub trait SpeechProvider {
    fn speak(&mut self, text: &str, locale: &str);

    /// 再生中・待機中の読み上げをすべて取り消す
    fn cancel(&mut self);
}
