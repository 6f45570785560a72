//! Tuplecheck CLI.
//!
//! ```text
//! tuplecheck [OPTIONS] <SYNONYMS> <FILE1> <FILE2> [N]
//! ```
//!
//! Prints the share of FILE1's N-word tuples that also occur in FILE2 as a
//! percentage on stdout. Diagnostics and logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tuplecheck::{compare_files, DetectorConfig};

#[derive(Debug, Parser)]
#[command(name = "tuplecheck", version, about = "Estimate n-tuple overlap between two text files")]
struct Cli {
    /// Synonym file: one group per line, the first word is canonical
    synonyms: PathBuf,

    /// Candidate file checked for overlap
    file1: PathBuf,

    /// Reference file checked against
    file2: PathBuf,

    /// Tuple size N (integer; defaults to the configured size, 3)
    #[arg(allow_hyphen_values = true)]
    n: Option<String>,

    /// YAML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Extract candidate and reference tuples concurrently
    #[arg(long)]
    parallel: bool,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "tuplecheck=debug")
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,

    /// Print the full report as JSON instead of a percentage
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(error) = init_tracing(&cli.log_level) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }
    match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => DetectorConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => DetectorConfig::default(),
    };
    if let Some(raw) = &cli.n {
        config = config.with_tuple_size(parse_tuple_size(raw));
    }
    if cli.parallel {
        config.overlap.use_parallel = true;
    }

    match compare_files(&cli.synonyms, &cli.file1, &cli.file2, &config) {
        Ok(report) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            tracing::info!(error = %error, "comparison_failed");
            eprintln!("{}", error.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Parses the tuple size argument. Malformed input is reported and becomes
/// `0`, which the overlap engine then rejects.
fn parse_tuple_size(raw: &str) -> i32 {
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid N_value.");
        0
    })
}

fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("invalid log filter {default_filter:?}"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!(error))
}
