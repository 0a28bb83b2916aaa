//! Weight Scanner - rank Rust functions by their declared weights
//!
//! Scans Rust sources for `fn name(..) -> Weight {` headers, attributes every
//! `Weight::from_parts(ref_time, proof_size)` literal in the function body to
//! that function, and ranks functions by each dimension.
//!
//! ```rust,ignore
//! use weight_scanner::reporters::{self, OutputFormat, ReportOptions};
//! use weight_scanner::scanner::WeightScanner;
//!
//! let results = WeightScanner::default().scan(Path::new("runtime/src/weights"));
//! let text = reporters::report(&results, OutputFormat::Text, &ReportOptions::default())?;
//! ```

pub mod cli;
pub mod config;
pub mod models;
pub mod reporters;
pub mod scanner;
