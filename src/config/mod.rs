//! Configuration module for the weight scanner
//!
//! This module handles:
//! - Project-level configuration (weight-scanner.toml)
//! - Scan settings (extensions, ignore files)
//! - Path exclusions
//! - CLI defaults

mod project_config;

pub use project_config::{
    glob_match,
    load_project_config,
    CliDefaults,
    ExcludeConfig,
    ProjectConfig,
    ScanSettings,
    DEFAULT_EXTENSIONS,
    DEFAULT_TOP,
};
