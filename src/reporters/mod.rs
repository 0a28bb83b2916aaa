//! Output reporters for weight scan results
//!
//! Supports two output formats:
//! - `text` - Ranked terminal report
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::models::WeightResult;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Rendering options shared by all reporters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Entries per ranking
    pub top: usize,
    pub emoji: bool,
    /// Apply terminal styling (bold headers)
    pub color: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top: crate::config::DEFAULT_TOP as usize,
            emoji: true,
            color: false,
        }
    }
}

/// The two ranked dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    RefTime,
    ProofSize,
}

impl Metric {
    pub fn value(self, result: &WeightResult) -> u64 {
        match self {
            Metric::RefTime => result.ref_time,
            Metric::ProofSize => result.proof_size,
        }
    }
}

/// Top `top` results by `metric`, descending.
///
/// The sort is stable: results with equal values keep their input order.
pub fn rank(results: &[WeightResult], metric: Metric, top: usize) -> Vec<&WeightResult> {
    let mut sorted: Vec<&WeightResult> = results.iter().collect();
    sorted.sort_by(|a, b| metric.value(b).cmp(&metric.value(a)));
    sorted.truncate(top);
    sorted
}

/// Render results in the specified format
pub fn report(
    results: &[WeightResult],
    format: OutputFormat,
    options: &ReportOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(results, options)),
        OutputFormat::Json => json::render(results, options),
    }
}

/// Format an integer with `,` thousands separators.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn result(name: &str, ref_time: u64, proof_size: u64) -> WeightResult {
        WeightResult {
            file_path: format!("pallets/{name}/src/weights.rs"),
            line_number: 10,
            function_name: name.to_string(),
            ref_time,
            proof_size,
            raw_expression: format!("Weight::from_parts({ref_time}, {proof_size})"),
            lower_bound: false,
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(2_000), "2,000");
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_rank_descending() {
        let results = vec![
            result("a", 10, 300),
            result("b", 30, 100),
            result("c", 20, 200),
        ];
        let by_ref: Vec<_> = rank(&results, Metric::RefTime, 5)
            .iter()
            .map(|r| r.function_name.as_str())
            .collect();
        assert_eq!(by_ref, vec!["b", "c", "a"]);

        let by_proof: Vec<_> = rank(&results, Metric::ProofSize, 2)
            .iter()
            .map(|r| r.function_name.as_str())
            .collect();
        assert_eq!(by_proof, vec!["a", "c"]);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let results = vec![
            result("first", 5, 0),
            result("big", 9, 0),
            result("second", 5, 0),
            result("third", 5, 0),
        ];
        let names: Vec<_> = rank(&results, Metric::RefTime, 10)
            .iter()
            .map(|r| r.function_name.as_str())
            .collect();
        assert_eq!(names, vec!["big", "first", "second", "third"]);
    }

    #[test]
    fn test_rank_zero_top() {
        let results = vec![result("a", 1, 1)];
        assert!(rank(&results, Metric::RefTime, 0).is_empty());
    }
}
