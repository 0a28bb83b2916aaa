//! Per-function weight aggregation.

use super::extract::resolve_literal;
use super::matcher::{ExpressionMatcher, WeightCall};
use crate::models::WeightTotals;

/// Sum every direct and accumulated weight constructor in a span.
///
/// Both dimensions are summed independently with saturating arithmetic.
/// Accumulations are always additive: a `.saturating_mul(k)` modifier is
/// never applied, so totals are a lower bound when scaling is present.
pub fn aggregate(matcher: &ExpressionMatcher, span_text: &str) -> WeightTotals {
    let matches = matcher.find(span_text);
    let mut totals = WeightTotals::default();

    for call in &matches.direct {
        add_call(&mut totals, call);
        totals
            .expressions
            .push(format!("Weight::from_parts({})", display_operands(call)));
    }

    for call in &matches.accumulated {
        add_call(&mut totals, call);
        if call.scaled {
            totals.lower_bound = true;
        }
        totals.expressions.push(format!(
            "saturating_add(Weight::from_parts({}))",
            display_operands(call)
        ));
    }

    totals
}

fn add_call(totals: &mut WeightTotals, call: &WeightCall<'_>) {
    let ref_time = resolve_literal(call.ref_time);
    let proof_size = resolve_literal(call.proof_size);
    if ref_time.is_none() || proof_size.is_none() {
        totals.lower_bound = true;
    }
    totals.ref_time = totals.ref_time.saturating_add(ref_time.unwrap_or(0));
    totals.proof_size = totals.proof_size.saturating_add(proof_size.unwrap_or(0));
}

fn display_operands(call: &WeightCall<'_>) -> String {
    format!(
        "{}, {}",
        collapse_whitespace(call.ref_time),
        collapse_whitespace(call.proof_size)
    )
}

/// Collapse every whitespace run to a single space.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
