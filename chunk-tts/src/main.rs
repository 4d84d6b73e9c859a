//! chunk-tts - Chunk prose into TTS-friendly fragments

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::ChunkTtsConfig;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tts_text::{chunk_with, normalize_with};

#[derive(Parser, Debug)]
#[command(name = "chunk-tts")]
#[command(about = "Chunk prose into TTS-friendly fragments", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the input text file (reads stdin if omitted)
    input: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum characters per chunk (default: from config, 200)
    #[arg(long)]
    max_len: Option<usize>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Enable debug output
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Subcommands
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set default maximum chunk length
    SetMaxLen {
        /// Characters per chunk (at least 1)
        value: usize,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Some(Commands::Config { action }) = &args.command {
        return handle_config_command(action);
    }

    // Load configuration
    let config = ChunkTtsConfig::load().context("Failed to load configuration")?;
    let max_len = args.max_len.unwrap_or(config.max_len);
    let rules = config.rule_set();
    log::debug!("config loaded, effective max_len={}", max_len);

    let raw_text = read_input(args.input.as_deref())?;

    if args.debug {
        eprintln!("Input: {} chars", raw_text.chars().count());
        eprintln!("Max length: {}", max_len);
    }

    let normalized = normalize_with(&raw_text, &rules);
    let chunks = chunk_with(&normalized, max_len, &rules)?;

    if args.debug {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for record in &chunks {
            *counts.entry(record.rule.as_str()).or_default() += 1;
        }
        eprintln!("Chunks: {}", chunks.len());
        for (rule, count) in counts {
            eprintln!("  {}: {}", rule, count);
        }
    }

    let json = if args.compact {
        serde_json::to_string(&chunks)?
    } else {
        serde_json::to_string_pretty(&chunks)?
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            if args.debug {
                eprintln!("Output: {}", path.display());
            }
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Read UTF-8 text from the given path, or from stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

fn handle_config_command(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = ChunkTtsConfig::load()?;
            println!("Configuration file: {:?}", ChunkTtsConfig::config_path()?);
            println!();
            println!("max_len = {}", config.max_len);
            match &config.subordinators {
                Some(words) => println!("subordinators = {:?}", words),
                None => println!("subordinators = (built-in)"),
            }
            match &config.discourse_markers {
                Some(words) => println!("discourse_markers = {:?}", words),
                None => println!("discourse_markers = (built-in)"),
            }
        }
        ConfigAction::SetMaxLen { value } => {
            if *value == 0 {
                anyhow::bail!("Max length must be at least 1");
            }
            let mut config = ChunkTtsConfig::load()?;
            config.max_len = *value;
            config.save()?;
            println!("Default max length set to: {}", config.max_len);
        }
    }
    Ok(())
}
