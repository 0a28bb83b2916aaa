//! Literal resolution for weight operands.
//!
//! Only plain integer literals are resolved. Anything symbolic (constants,
//! arithmetic, calls, typed suffixes such as `1_000u64`) resolves to zero, so
//! aggregated totals are a lower bound whenever such operands appear.

/// Resolve an operand to its integer value, or 0 if it is not a pure literal.
pub fn resolve(operand: &str) -> u64 {
    resolve_literal(operand).unwrap_or(0)
}

/// Resolve an operand to `Some(value)` only if it is a pure integer literal.
pub fn resolve_literal(operand: &str) -> Option<u64> {
    let compact: Vec<char> = operand.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized = strip_digit_separators(&compact);

    if normalized.is_empty() || !normalized.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Overflowing literals fall back to zero like any other parse failure
    normalized.parse::<u64>().ok()
}

/// Drop every `_` that sits directly between two ASCII digits.
fn strip_digit_separators(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let prev_digit = i > 0 && chars[i - 1].is_ascii_digit();
            let next_digit = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
            if prev_digit && next_digit {
                continue;
            }
        }
        out.push(c);
    }
    out
}
