//! hanyeong - 규칙 기반 한영/영한 번역 CLI

use std::path::PathBuf;
use std::process;

use clap::Parser;
use hanyeong::config::{default_config_path, load_config, read_config};
use hanyeong::similarity::is_korean_text;
use hanyeong::{load_bundle, Direction, DictionaryStore, Translator};

/// 짧은 한국어/영어 문장을 규칙 기반으로 번역합니다.
#[derive(Parser, Debug)]
#[command(name = "hanyeong")]
#[command(version)]
#[command(about = "Rule-based Korean-English translator")]
#[command(long_about = "Rule-based Korean-English translator.

EXAMPLES:
    hanyeong 나는 사과를 먹어요               # ko-en (auto-detected)
    hanyeong -d en-ko I eat an apple          # en-ko
    hanyeong --explain 그는 학교에 갔어요       # show clause structure
    hanyeong --spacing 나는사과를먹어요         # show spacing suggestions
    RUST_LOG=debug hanyeong 식은 죽 먹기        # trace pipeline decisions")]
struct Cli {
    /// Text to translate (joined with spaces)
    #[arg(value_name = "TEXT", required = true)]
    text: Vec<String>,

    /// Translation direction: ko-en or en-ko (auto-detected when omitted)
    #[arg(short, long)]
    direction: Option<Direction>,

    /// JSON dictionary bundle merged over the built-in tables
    #[arg(long, value_name = "FILE")]
    dictionary: Option<PathBuf>,

    /// Configuration file (default: ~/.config/hanyeong/config.json)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print spacing suggestions
    #[arg(long)]
    spacing: bool,

    /// Print the parsed structure of each clause (ko-en)
    #[arg(long)]
    explain: bool,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => read_config(path)?,
        None => load_config(default_config_path()),
    };

    let mut store = DictionaryStore::builtin();
    if let Some(path) = &cli.dictionary {
        let bundle = load_bundle(path)?;
        log::debug!("loaded {} dictionary entries from {}", bundle.len(), path.display());
        store = store.merge(&bundle);
    }
    let translator = Translator::new(store, config);

    let text = cli.text.join(" ");
    let direction = cli.direction.unwrap_or(if is_korean_text(&text) {
        Direction::KoEn
    } else {
        Direction::EnKo
    });

    if cli.explain && direction == Direction::KoEn {
        for line in translator.explain(&text) {
            println!("# {}", line);
        }
    }

    if cli.spacing {
        let suggestions = translator.spacing_suggestions(&text);
        if let Some(korean) = &suggestions.korean {
            println!("# spacing: {} ({:.2})", korean.corrected, korean.confidence);
        }
        for error in &suggestions.errors {
            println!("# {} [{}..{}] ({:.2})", error.message, error.start, error.end, error.confidence);
        }
    }

    println!("{}", translator.translate(&text, direction));
    Ok(())
}

fn main() {
    // 로깅 초기화 (error/warn만 출력, RUST_LOG로 조정)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("hanyeong: {}", e);
        process::exit(1);
    }
}
