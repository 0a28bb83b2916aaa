//! JSON reporter

use super::{rank, Metric, ReportOptions};
use crate::models::WeightResult;
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    total_functions: usize,
    top: usize,
    top_ref_time: Vec<RankedEntry<'a>>,
    top_proof_size: Vec<RankedEntry<'a>>,
}

#[derive(Serialize)]
struct RankedEntry<'a> {
    rank: usize,
    location: String,
    #[serde(flatten)]
    result: &'a WeightResult,
}

fn ranked<'a>(results: &'a [WeightResult], metric: Metric, top: usize) -> Vec<RankedEntry<'a>> {
    rank(results, metric, top)
        .into_iter()
        .enumerate()
        .map(|(i, result)| RankedEntry {
            rank: i + 1,
            location: result.location(),
            result,
        })
        .collect()
}

/// Render both rankings as pretty-printed JSON
pub fn render(results: &[WeightResult], options: &ReportOptions) -> Result<String> {
    let report = JsonReport {
        total_functions: results.len(),
        top: options.top,
        top_ref_time: ranked(results, Metric::RefTime, options.top),
        top_proof_size: ranked(results, Metric::ProofSize, options.top),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
