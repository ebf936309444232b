//! Command-line trainer.
//!
//! Usage: bytepair [OPTIONS] [INPUT]
//!
//! Reads INPUT (default `enw3`) in full, trains a vocabulary, and writes the
//! token stream to `INPUT.rtok` every few steps and once at the end.

use anyhow::{Context, Result};
use bytepair_rs::{corpus, FileCheckpoint, Trainer, TrainerConfig};
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::{info, LevelFilter};
use std::path::PathBuf;

const DEFAULT_INPUT: &str = "enw3";

#[derive(Parser, Debug)]
#[command(author, version, about = "Byte-pair encoding vocabulary trainer", long_about = None)]
struct Cli {
    /// Input file to train on
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Maximum number of merge steps
    #[arg(long, value_name = "STEPS")]
    max_merges: Option<usize>,

    /// Merge steps between checkpoints
    #[arg(long, value_name = "STEPS")]
    checkpoint_interval: Option<usize>,

    /// Merge steps between progress lines
    #[arg(long, value_name = "STEPS")]
    progress_interval: Option<usize>,

    /// Live fraction below which the stream is compacted
    #[arg(long, value_name = "FRACTION")]
    compaction_threshold: Option<f64>,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, action = ArgAction::Count)]
    quiet: u8,
}

impl Cli {
    fn config(&self) -> TrainerConfig {
        let mut config = TrainerConfig::default();
        if let Some(max_merges) = self.max_merges {
            config = config.with_max_merges(max_merges);
        }
        if let Some(interval) = self.checkpoint_interval {
            config = config.with_checkpoint_interval(interval);
        }
        if let Some(interval) = self.progress_interval {
            config = config.with_progress_interval(interval);
        }
        if let Some(threshold) = self.compaction_threshold {
            config = config.with_compaction_threshold(threshold);
        }
        config
    }
}

fn init_logging(verbose: u8, quiet: u8) {
    let level = match (quiet, verbose) {
        (0, 0) => LevelFilter::Info,
        (0, 1) => LevelFilter::Debug,
        (0, _) => LevelFilter::Trace,
        (1, _) => LevelFilter::Warn,
        _ => LevelFilter::Error,
    };

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();
    builder.filter_level(level);
    let _ = builder.try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = cli.config();
    let input = corpus::load(&cli.input)?;
    info!("training on {} ({} bytes)", cli.input.display(), input.len());

    let mut trainer = Trainer::new(&input, config).context("invalid trainer configuration")?;
    let mut sink = FileCheckpoint::for_input(&cli.input);
    let summary = trainer
        .run(&mut sink)
        .with_context(|| format!("training on {} failed", cli.input.display()))?;

    println!("\n=== Statistics ===");
    println!("Input bytes: {}", summary.input_length);
    println!("Final tokens: {}", summary.token_count);
    println!("Merges: {}", summary.merges);
    println!("Stopped: {}", summary.stop_reason);
    println!("Compactions: {}", summary.compactions);
    if summary.failed_checkpoints > 0 {
        println!("Failed checkpoints: {}", summary.failed_checkpoints);
    }
    println!("Compression ratio: {:.2}%", summary.compression_ratio());
    println!("Tokens written to {}", sink.path().display());

    Ok(())
}
