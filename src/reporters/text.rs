//! Text (terminal) reporter

use super::{format_number, rank, Metric, ReportOptions};
use crate::models::WeightResult;
use console::{style, StyledObject};

const RULE_WIDTH: usize = 60;

const LOWER_BOUND_NOTE: &str =
    "* lower bound: symbolic operands count as zero and saturating_mul factors are ignored";

/// Render both rankings as terminal output.
///
/// Each entry takes two lines (metric, location) followed by a blank line.
pub fn render(results: &[WeightResult], options: &ReportOptions) -> String {
    let mut out = String::new();

    if results.is_empty() {
        out.push_str("No weight data found\n");
        return out;
    }

    out.push_str(&format!(
        "Total found {} weight functions\n\n",
        results.len()
    ));

    let sections = [
        (Metric::RefTime, "🔥", "Maximum Ref Time Ranking:"),
        (Metric::ProofSize, "📊", "Maximum Proof Size Ranking:"),
    ];

    let mut any_lower_bound = false;
    for (metric, icon, title) in sections {
        let heading = if options.emoji {
            format!("{} {}", icon, title)
        } else {
            title.to_string()
        };
        let heading = paint(heading, options.color, |s| s.bold());
        out.push_str(&format!("{}\n", heading));
        out.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));

        for (i, result) in rank(results, metric, options.top).into_iter().enumerate() {
            let marker = if result.lower_bound {
                any_lower_bound = true;
                " *"
            } else {
                ""
            };
            out.push_str(&format!(
                "{:2}. {:>15} | {}{}\n",
                i + 1,
                format_number(metric.value(result)),
                result.function_name,
                marker
            ));
            let pin = if options.emoji { "📁 " } else { "" };
            out.push_str(&format!("     {}{}\n", pin, result.location()));
            out.push('\n');
        }
    }

    if any_lower_bound {
        let note = paint(LOWER_BOUND_NOTE.to_string(), options.color, |s| s.dim());
        out.push_str(&format!("{}\n", note));
    }

    out
}

fn paint(
    text: String,
    color: bool,
    apply: impl FnOnce(StyledObject<String>) -> StyledObject<String>,
) -> String {
    if color {
        apply(style(text)).to_string()
    } else {
        text
    }
}
