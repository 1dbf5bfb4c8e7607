//! Koroman - 한글 로마자 표기 변환기
//!
//! 표준 입력을 한 줄씩 읽어 로마자로 변환한 결과를 출력한다.

use clap::Parser;
use koroman::config::{load_config, load_config_from};
use koroman::{ConsonantAssimilation, Romanizer, WordCategory};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "koroman")]
#[command(about = "Romanize Korean text read from standard input")]
#[command(version)]
struct Args {
    /// Word type: typical, substantives, compound, district, name, nametypical
    category: Option<String>,

    /// Consonant assimilation: regressive, progressive
    assimilation: Option<String>,

    /// Custom configuration file path
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Keep the first letter of each romanized run in lower case
    #[arg(long)]
    no_capitalize: bool,

    /// Do not insert hyphens at ambiguous vowel boundaries
    #[arg(long)]
    no_hyphen: bool,
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // 설정 로드
    let mut config = match &args.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    if args.no_capitalize {
        config.capitalize_first_letter = false;
    }
    if args.no_hyphen {
        config.hyphen_on_ambiguous_vowel = false;
    }

    // 알 수 없는 값은 알리고 설정값 사용
    let category = match args.category.as_deref().map(str::parse::<WordCategory>) {
        Some(Ok(category)) => category,
        Some(Err(_)) => {
            eprintln!("Unknown type: {}", args.category.as_deref().unwrap_or_default());
            config.category
        }
        None => config.category,
    };
    let assimilation = match args
        .assimilation
        .as_deref()
        .map(str::parse::<ConsonantAssimilation>)
    {
        Some(Ok(assimilation)) => assimilation,
        Some(Err(_)) => {
            eprintln!(
                "Unknown consonant assimilation: {}",
                args.assimilation.as_deref().unwrap_or_default()
            );
            config.assimilation
        }
        None => config.assimilation,
    };

    log::debug!("유형: {}, 자음동화: {}", category, assimilation);

    let romanizer = Romanizer::from_config(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                std::process::exit(1);
            }
        };
        let romanized = romanizer.romanize(&line, category, assimilation);
        if let Err(e) = writeln!(out, "{}", romanized) {
            // 파이프가 닫히면 조용히 종료
            if e.kind() != io::ErrorKind::BrokenPipe {
                log::error!("출력 실패: {}", e);
                std::process::exit(1);
            }
            return;
        }
    }
}
