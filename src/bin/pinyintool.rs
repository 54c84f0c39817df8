use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use pinyin_engine::dict::PinyinDict;
use pinyin_engine::settings::init_custom;
use pinyin_engine::unicode::is_hanzi;
use pinyin_engine::{resolve, ConvertOptions, Engine, RenderMode};

#[derive(Parser)]
#[command(name = "pinyintool", about = "Hanzi to pinyin conversion")]
struct Cli {
    /// Directory for trace output (only with the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text to pinyin ("-" reads lines from stdin)
    Convert {
        text: String,
        /// tone | plain | capitalized
        #[arg(short, long)]
        mode: Option<RenderMode>,
        /// Separator between adjacent syllables
        #[arg(short, long)]
        separator: Option<String>,
        /// Settings TOML providing defaults for mode and separator
        #[arg(long)]
        settings: Option<String>,
        /// Dictionary file (`<hex>=>syllable` per line)
        #[arg(long)]
        dict: Option<String>,
    },

    /// Show how each character of the text resolves
    Explain {
        text: String,
        #[arg(short, long, default_value = "plain")]
        mode: RenderMode,
        #[arg(long)]
        dict: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print dictionary statistics
    DictStats {
        #[arg(long)]
        dict: Option<String>,
    },
}

#[derive(Serialize)]
struct ExplainRow {
    ch: char,
    code_point: String,
    text: String,
    recognized: bool,
    tone: Option<u8>,
}

fn main() {
    let cli = Cli::parse();

    // Held until main returns so buffered trace lines are flushed.
    let _trace_guard = cli
        .trace_dir
        .as_deref()
        .and_then(|dir| pinyin_engine::trace_init::init_tracing(Path::new(dir)));

    match cli.command {
        Command::Convert {
            text,
            mode,
            separator,
            settings,
            dict,
        } => {
            if let Some(path) = settings {
                install_settings(&path);
            }
            let mut options = pinyin_engine::settings::settings().convert_options();
            if let Some(mode) = mode {
                options.mode = mode;
            }
            if let Some(separator) = separator {
                options.separator = separator;
            }

            let engine = open_engine(dict.as_deref());
            if text == "-" {
                for line in io::stdin().lock().lines() {
                    let line = line.unwrap_or_else(|e| {
                        eprintln!("Failed to read line: {}", e);
                        process::exit(1);
                    });
                    println!("{}", convert_or_exit(&engine, &line, &options));
                }
            } else {
                println!("{}", convert_or_exit(&engine, &text, &options));
            }
        }

        Command::Explain {
            text,
            mode,
            dict,
            json,
        } => {
            let engine = open_engine(dict.as_deref());
            let tables = engine.tables().unwrap_or_else(|e| {
                eprintln!("{}", e);
                process::exit(1);
            });
            let rows: Vec<ExplainRow> = text
                .chars()
                .map(|ch| {
                    let resolved = resolve(tables, ch, mode);
                    let tone = tables
                        .dict
                        .get(ch)
                        .and_then(|s| tables.tones.syllable_tone(s));
                    ExplainRow {
                        ch,
                        code_point: format!("U+{:04X}", ch as u32),
                        text: resolved.text.into_owned(),
                        recognized: resolved.recognized,
                        tone,
                    }
                })
                .collect();

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&rows).expect("JSON serialization failed")
                );
            } else {
                for row in &rows {
                    let tone = row.tone.map_or("-".to_string(), |t| t.to_string());
                    println!(
                        "{}\t{}\t{:?}\t{}\ttone={}",
                        row.ch, row.code_point, row.text, row.recognized, tone
                    );
                }
            }
        }

        Command::DictStats { dict } => {
            let engine = open_engine(dict.as_deref());
            let tables = engine.tables().unwrap_or_else(|e| {
                eprintln!("{}", e);
                process::exit(1);
            });
            let mut by_tone: BTreeMap<String, usize> = BTreeMap::new();
            let mut non_hanzi = 0usize;
            for (ch, syllable) in tables.dict.iter() {
                if !is_hanzi(ch) {
                    non_hanzi += 1;
                }
                let key = match tables.tones.syllable_tone(syllable) {
                    Some(t) => format!("tone {t}"),
                    None => "neutral".to_string(),
                };
                *by_tone.entry(key).or_default() += 1;
            }
            println!("entries: {}", tables.dict.len());
            for (tone, count) in &by_tone {
                println!("  {tone}: {count}");
            }
            if non_hanzi > 0 {
                println!("outside ideograph blocks: {non_hanzi}");
            }
        }
    }
}

fn install_settings(path: &str) {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read settings at {}: {}", path, e);
        process::exit(1);
    });
    if let Err(e) = init_custom(content) {
        eprintln!("Invalid settings at {}: {}", path, e);
        process::exit(1);
    }
}

fn open_engine(dict_file: Option<&str>) -> Engine {
    let dict = match dict_file {
        Some(path) => PinyinDict::load(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Failed to open dictionary at {}: {}", path, e);
            process::exit(1);
        }),
        None => PinyinDict::parse(PinyinDict::global_source()),
    };
    Engine::new(dict)
}

fn convert_or_exit(engine: &Engine, text: &str, options: &ConvertOptions) -> String {
    engine.convert(text, options).unwrap_or_else(|e| {
        eprintln!("Conversion failed: {}", e);
        process::exit(1);
    })
}
