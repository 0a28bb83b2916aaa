//! CLI definition and dispatch

mod scan;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Parse and validate workers count (1-64)
fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("workers must be at least 1".to_string())
    } else if n > 64 {
        Err("workers cannot exceed 64".to_string())
    } else {
        Ok(n)
    }
}

/// Scan Rust weight files for maximum ref time and proof size
#[derive(Parser, Debug)]
#[command(name = "weight-scanner")]
#[command(
    version,
    about = "Scan Rust weight files for maximum ref time and proof size",
    long_about = "Finds every `fn name(..) -> Weight {` in the given file or directory, \
sums the literal `Weight::from_parts(ref_time, proof_size)` values attributed to each \
function (including `.saturating_add(..)` chains), and ranks functions by each dimension.\n\n\
Only integer literals are resolved. Symbolic operands count as zero and \
`.saturating_mul(..)` factors are ignored, so marked totals are lower bounds.",
    after_help = "\
Examples:
  weight-scanner runtime/src/weights          Top 5 by ref time and proof size
  weight-scanner pallets 20                   Top 20
  weight-scanner pallets/evm/src/weights.rs   Scan a single file
  weight-scanner pallets --format json        JSON output for scripting"
)]
pub struct Cli {
    /// Directory path to scan or single .rs file
    pub directory: PathBuf,

    /// Number of top results to show (default: 5)
    #[arg(allow_negative_numbers = true)]
    pub x: Option<i64>,

    /// Output format: text, json
    #[arg(long, short = 'f', value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Disable emoji in output (cleaner for CI logs)
    #[arg(long)]
    pub no_emoji: bool,

    /// Number of parallel workers (1-64)
    #[arg(long, value_parser = parse_workers)]
    pub workers: Option<usize>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    scan::run(
        &cli.directory,
        cli.x,
        cli.format.as_deref(),
        cli.no_emoji,
        cli.workers,
    )
}
