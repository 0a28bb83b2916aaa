//! Project-level configuration support
//!
//! Loads configuration from `weight-scanner.toml` or `.weight-scannerrc.json`
//! in the scan root (the scanned directory, or the parent of a scanned file).
//!
//! # Configuration Format
//!
//! ```toml
//! # weight-scanner.toml
//!
//! [defaults]
//! top = 10
//! format = "text"
//! no_emoji = false
//!
//! [scan]
//! extensions = ["rs"]
//! respect_ignore_files = false
//!
//! [exclude]
//! paths = ["**/mock/**", "target/"]
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Number of ranked entries shown when neither the CLI nor config says otherwise
pub const DEFAULT_TOP: i64 = 5;

/// Source extensions scanned by default
pub const DEFAULT_EXTENSIONS: &[&str] = &["rs"];

/// Project configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,

    /// File discovery settings
    #[serde(default)]
    pub scan: ScanSettings,

    /// Path exclusion patterns
    #[serde(default)]
    pub exclude: ExcludeConfig,
}

/// Default CLI flags that can be set in project config
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CliDefaults {
    /// Ranked entries per section when `x` is not passed
    #[serde(default)]
    pub top: Option<i64>,

    /// Default output format (text, json)
    #[serde(default)]
    pub format: Option<String>,

    /// Disable emoji by default
    #[serde(default)]
    pub no_emoji: Option<bool>,

    /// Default number of workers
    #[serde(default)]
    pub workers: Option<usize>,
}

/// File discovery settings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScanSettings {
    /// Extensions to scan, without the dot (default: rs)
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Honour hidden-file rules and .gitignore/.ignore files
    #[serde(default)]
    pub respect_ignore_files: bool,
}

impl ScanSettings {
    /// Configured extensions, or the defaults when none are set.
    /// Leading dots are tolerated (`.rs` == `rs`).
    pub fn effective_extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            return DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect();
        }
        self.extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect()
    }
}

/// Path exclusion configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ExcludeConfig {
    /// Paths/patterns to exclude, relative to the scan root
    #[serde(default)]
    pub paths: Vec<String>,
}

/// Load project configuration from the scan root.
///
/// Searches for configuration files in this order:
/// 1. `weight-scanner.toml`
/// 2. `.weight-scannerrc.json`
///
/// A file that fails to parse is reported and skipped. Returns defaults when
/// nothing usable is found.
pub fn load_project_config(root: &Path) -> ProjectConfig {
    let toml_path = root.join("weight-scanner.toml");
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    let json_path = root.join(".weight-scannerrc.json");
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

fn load_json_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Simple glob pattern matching
pub fn glob_match(pattern: &str, path: &str) -> bool {
    // **/X/** matches if path contains X as a directory
    if pattern.starts_with("**/") && pattern.ends_with("/**") {
        let middle = pattern.trim_start_matches("**/").trim_end_matches("/**");
        return path.contains(&format!("/{}/", middle))
            || path.starts_with(&format!("{}/", middle));
    }

    if pattern.contains("**") {
        let parts: Vec<&str> = pattern.split("**").collect();
        if parts.len() == 2 {
            let prefix = parts[0].trim_end_matches('/');
            let suffix = parts[1].trim_start_matches('/');

            if !prefix.is_empty() && !path.starts_with(prefix) {
                return false;
            }

            if suffix.is_empty() {
                return true;
            }
            return match suffix.split_once('*') {
                Some((before, after)) => path.contains(before) && path.ends_with(after),
                None => path.ends_with(suffix),
            };
        }
    }

    // Single * matches within the pattern's prefix/suffix
    if let Some((prefix, suffix)) = pattern.split_once('*') {
        if !suffix.contains('*') {
            return path.starts_with(prefix) && path.ends_with(suffix);
        }
    }

    // "target/" only matches "target/foo.rs", NOT "pallets/target/foo.rs"
    path.starts_with(pattern) || path == pattern
}
