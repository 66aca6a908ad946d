use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vocab_dashboard_common::ALL_CATEGORIES;

#[derive(Parser)]
#[command(name = "vocab-dashboard")]
#[command(about = "日本語単語カード・ダッシュボード", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 語彙データセット（data/vocab.json, static/vocab.js）を生成
    Generate {
        /// 出力ディレクトリ
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// 生成件数（省略時は設定値）
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// カテゴリ一覧を表示
    Categories {
        /// 語彙データ（vocab.json / vocab.js）
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// 語彙を検索
    Search {
        /// 検索語（表記・読み・訳の部分一致）
        #[arg(default_value = "")]
        query: String,

        /// カテゴリ
        #[arg(short, long, default_value = ALL_CATEGORIES)]
        category: String,

        /// 語彙データ
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// 表示件数の上限
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// 対話式で語彙カードを閲覧
    Browse {
        /// 語彙データ
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// 設定管理
    Config {
        /// 語彙データのパスを設定
        #[arg(long)]
        set_data: Option<PathBuf>,

        /// 読み上げコマンドを設定（例: "espeak-ng -v ja"）
        #[arg(long)]
        set_tts: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
