//! `bursts` - burst state decoding over timestamped event streams.
//!
//! Reads a file where each line is one record of whitespace-separated,
//! sorted floating-point timestamps, decodes the burst state sequence with
//! the selected algorithm, and prints one `State X: [start - end)` line per
//! run. Log output goes to stderr; stdout carries only decode results.

use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;

use bd_common::Result;
use bd_core::config::BurstConfig;
use bd_core::decode::{decode_with, ForwardDpDecoder, TrellisShortestPathDecoder};
use bd_core::{input, report};

/// Infer burst intensity states from event arrival times.
#[derive(Parser, Debug)]
#[command(name = "bursts")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Decoding algorithm to run.
    #[arg(value_enum)]
    algorithm: Algorithm,

    /// Input file; each line is one record of whitespace-separated
    /// timestamps.
    file_path: PathBuf,

    /// Ratio between consecutive rate levels (must be > 1).
    #[arg(short, long, default_value_t = 3.0)]
    scale: f64,

    /// Escalation penalty weight (must be >= 0).
    #[arg(short = 'g', long, default_value_t = 0.5, allow_negative_numbers = true)]
    penalty: f64,

    /// Enable debug logging.
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    /// Forward dynamic-programming decoder.
    Viterbi,
    /// Explicit-trellis shortest-path decoder.
    Trellis,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(&cli) {
        tracing::error!(code = err.code(), category = %err.category(), "{err}");
        eprintln!("error: {err}");
        if cli.debug {
            eprintln!("{}", err.to_structured());
        }
        std::process::exit(err.code());
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = BurstConfig {
        scale: cli.scale,
        penalty: cli.penalty,
        ..Default::default()
    };
    config.validate()?;

    let text = fs::read_to_string(&cli.file_path)?;
    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let timestamps = input::parse_record(line)?;
        let gaps = input::gaps_from_timestamps(&timestamps)?;
        let decoded = match cli.algorithm {
            Algorithm::Viterbi => decode_with(&ForwardDpDecoder, &gaps, &config)?,
            Algorithm::Trellis => decode_with(&TrellisShortestPathDecoder, &gaps, &config)?,
        };
        tracing::debug!(
            line = line_no + 1,
            intervals = gaps.len(),
            total_cost = decoded.total_cost,
            "decoded record"
        );
        for run in report::summarize(&timestamps, &decoded.states) {
            println!("{run}");
        }
    }
    Ok(())
}

fn init_logging(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
