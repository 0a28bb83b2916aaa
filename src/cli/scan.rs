//! Scan command: resolve settings, scan, and print the ranking report

use crate::config::{load_project_config, DEFAULT_TOP};
use crate::reporters::{self, OutputFormat, ReportOptions};
use crate::scanner::{ScanOptions, WeightScanner};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

const DEFAULT_WORKERS: usize = 4;

/// Run the scan. CLI flags override project config, which overrides defaults.
pub fn run(
    path: &Path,
    top: Option<i64>,
    format: Option<&str>,
    no_emoji: bool,
    workers: Option<usize>,
) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path '{}' does not exist", path.display());
    }

    let config = load_project_config(config_root(path));

    let top = top.or(config.defaults.top).unwrap_or(DEFAULT_TOP);
    let format = match format.or(config.defaults.format.as_deref()) {
        Some(f) => OutputFormat::from_str(f)?,
        None => OutputFormat::default(),
    };
    let emoji = !(no_emoji || config.defaults.no_emoji.unwrap_or(false));
    let workers = workers
        .or(config.defaults.workers)
        .unwrap_or(DEFAULT_WORKERS)
        .clamp(1, 64);

    if format == OutputFormat::Text {
        println!("Scanning path: {}", path.display());
        println!("Showing top {} results", top);
        println!("{}", "-".repeat(60));
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(create_spinner_style());
    spinner.set_message(format!("Scanning {}...", path.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let scanner = WeightScanner::new(ScanOptions::from_config(&config, workers));
    let results = scanner.scan(path);

    spinner.finish_and_clear();
    info!(
        "Found {} weight functions under {}",
        results.len(),
        path.display()
    );

    let options = ReportOptions {
        // Non-positive counts render empty rankings
        top: usize::try_from(top).unwrap_or(0),
        emoji,
        color: console::colors_enabled(),
    };
    let rendered = reporters::report(&results, format, &options)?;

    match format {
        OutputFormat::Text => print!("{}", rendered),
        OutputFormat::Json => println!("{}", rendered),
    }

    Ok(())
}

/// Directory that holds project config: the scanned directory, or the
/// parent of a scanned file.
fn config_root(path: &Path) -> &Path {
    if path.is_file() {
        path.parent().unwrap_or(Path::new("."))
    } else {
        path
    }
}

fn create_spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}
