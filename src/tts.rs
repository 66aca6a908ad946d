//! 外部コマンドによる読み上げ
//!
//! `espeak-ng -v ja` や `say -v Kyoko` のようなコマンドを子プロセスとして起動する。
//! 起動したら待たずに戻り、取り消し時は子プロセスを終了させる。

use std::process::{Child, Command, Stdio};
use vocab_dashboard_common::SpeechProvider;

/// コマンド中で言語タグに置き換える文字列
pub const LOCALE_PLACEHOLDER: &str = "{locale}";

pub struct CommandSpeech {
    command: Option<String>,
    child: Option<Child>,
}

impl CommandSpeech {
    pub fn new(command: Option<String>) -> Self {
        Self {
            command: command.filter(|c| !c.trim().is_empty()),
            child: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.command.is_some()
    }

    /// コマンド文字列を引数列に展開し、最後に読み上げる文を付ける
    pub fn build_args(command: &str, text: &str, locale: &str) -> Vec<String> {
        command
            .split_whitespace()
            .map(|part| part.replace(LOCALE_PLACEHOLDER, locale))
            .chain(std::iter::once(text.to_string()))
            .collect()
    }
}

impl SpeechProvider for CommandSpeech {
    fn speak(&mut self, text: &str, locale: &str) {
        let Some(command) = self.command.as_deref() else {
            tracing::warn!("読み上げコマンドが未設定です (config --set-tts)");
            return;
        };

        let args = Self::build_args(command, text, locale);
        let Some((program, rest)) = args.split_first() else {
            return;
        };

        // 前の読み上げは新しい子プロセスより先に止める
        self.cancel();

        match Command::new(program)
            .args(rest)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => self.child = Some(child),
            Err(e) => tracing::warn!(program = %program, "読み上げコマンドの起動に失敗: {}", e),
        }
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_args_replaces_locale() {
        let args = CommandSpeech::build_args("espeak-ng -v {locale}", "猫", "ja-JP");
        assert_eq!(args, vec!["espeak-ng", "-v", "ja-JP", "猫"]);
    }

    #[test]
    fn test_build_args_keeps_text_with_spaces() {
        let args = CommandSpeech::build_args("say", "ohayou gozaimasu", "ja-JP");
        assert_eq!(args, vec!["say", "ohayou gozaimasu"]);
    }

    #[test]
    fn test_blank_command_is_unavailable() {
        assert!(!CommandSpeech::new(None).is_available());
        assert!(!CommandSpeech::new(Some("  ".into())).is_available());
        assert!(CommandSpeech::new(Some("say".into())).is_available());
    }

    #[test]
    fn test_speak_without_command_is_noop() {
        let mut speech = CommandSpeech::new(None);
        speech.speak("猫", "ja-JP");
        speech.cancel();
        assert!(speech.child.is_none());
    }

    #[test]
    fn test_speak_with_missing_program_does_not_panic() {
        let mut speech = CommandSpeech::new(Some("definitely-not-a-real-tts-binary-42".into()));
        speech.speak("猫", "ja-JP");
        assert!(speech.child.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_speak_stops_previous_child_first() {
        let previous = Command::new("sleep")
            .arg("30")
            .spawn()
            .expect("sleep を起動できない");

        let mut speech = CommandSpeech::new(Some("definitely-not-a-real-tts-binary-42".into()));
        speech.child = Some(previous);
        speech.speak("猫", "ja-JP");

        // 起動に失敗しても前の読み上げは止まっている
        assert!(speech.child.is_none());
    }
}
