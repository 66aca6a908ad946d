use clap::Parser;
use tracing_subscriber::EnvFilter;
use vocab_dashboard::{cli, config, dataset, error, generator, terminal};
use vocab_dashboard_common::{categories, Filter};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Generate { output, count } => {
            println!("📚 vocab-dashboard - データ生成\n");

            let base = generator::base_entries()?;
            let target = count.unwrap_or(config.entry_count);
            let entries = generator::generate(&base, target);
            println!("✔ 基本語彙{}件から{}件を生成", base.len(), entries.len());

            let files = generator::write_dataset(&entries, &output)?;
            println!("✔ {}", files.json_path.display());
            println!("✔ {}", files.script_path.display());
        }

        Commands::Categories { data } => {
            let path = config.resolve_data_path(data)?;
            let vocab = dataset::load_vocab(&path)?;
            for category in categories(&vocab) {
                println!("{}", category);
            }
        }

        Commands::Search { query, category, data, limit } => {
            let path = config.resolve_data_path(data)?;
            let vocab = dataset::load_vocab(&path)?;
            let filter = Filter::new(&query, &category);
            let visible = filter.apply(&vocab);

            for item in visible.iter().take(limit.unwrap_or(usize::MAX)) {
                println!("{}  {}  {}  [{}]", item.word, item.reading, item.translation, item.category);
            }
            println!("\n{}件 / 全{}件", visible.len(), vocab.len());
        }

        Commands::Browse { data } => {
            let path = config.resolve_data_path(data)?;
            let vocab = dataset::load_vocab(&path)?;
            println!("📖 vocab-dashboard - {}件を読み込みました", vocab.len());
            terminal::run_browser(vocab, config.tts_command.clone())?;
        }

        Commands::Config { set_data, set_tts, show } => {
            let mut config = config;

            if set_data.is_some() || set_tts.is_some() {
                if let Some(path) = set_data {
                    config.data_path = Some(path);
                }
                if let Some(command) = set_tts {
                    config.tts_command = Some(command);
                }
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show {
                println!("設定:");
                println!(
                    "  語彙データ: {}",
                    config.data_path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "未設定".into())
                );
                println!("  読み上げコマンド: {}", config.tts_command.as_deref().unwrap_or("未設定"));
                println!("  生成件数: {}", config.entry_count);
            }
        }
    }

    Ok(())
}
