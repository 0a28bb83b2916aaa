//! Regex patterns that locate weight expressions and weight-returning
//! function headers.
//!
//! All patterns span line breaks: operands may be split across lines with
//! arbitrary whitespace. Operands are captured non-greedily up to the first
//! comma and the closing parenthesis, so operands containing their own
//! parentheses or commas (e.g. `T::DbWeight::get().reads(1)`) are not
//! supported as the second operand.

use regex::Regex;
use std::sync::OnceLock;

static CONSTRUCTOR_PATTERN: OnceLock<Regex> = OnceLock::new();
static ACCUMULATION_PATTERN: OnceLock<Regex> = OnceLock::new();
static HEADER_PATTERN: OnceLock<Regex> = OnceLock::new();

/// `Weight::from_parts(ref_time, proof_size)`
fn constructor_pattern() -> &'static Regex {
    CONSTRUCTOR_PATTERN.get_or_init(|| {
        Regex::new(r"Weight::from_parts\s*\(\s*([^,]+?)\s*,\s*([^)]+?)\s*\)")
            .expect("valid regex")
    })
}

/// `.saturating_add(Weight::from_parts(a, b))`, optionally with a
/// `.saturating_mul(k)` modifier inside the wrapper.
fn accumulation_pattern() -> &'static Regex {
    ACCUMULATION_PATTERN.get_or_init(|| {
        Regex::new(concat!(
            r"\.saturating_add\s*\(\s*",
            r"(?P<ctor>Weight::from_parts\s*\(\s*(?P<ref_time>[^,]+?)\s*,\s*(?P<proof_size>[^)]+?)\s*\))",
            r"(?P<scale>\s*\.saturating_mul\s*\([^)]+?\))?",
            r"\s*\)",
        ))
        .expect("valid regex")
    })
}

/// `fn name(<opaque params>) -> Weight {`
pub(crate) fn header_pattern() -> &'static Regex {
    HEADER_PATTERN.get_or_init(|| {
        Regex::new(r"fn\s+(\w+)\s*\([^)]*\)\s*->\s*Weight\s*\{").expect("valid regex")
    })
}

/// One located weight constructor with its two raw operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightCall<'a> {
    pub ref_time: &'a str,
    pub proof_size: &'a str,
    /// Byte offset of `Weight::from_parts` within the searched text
    pub offset: usize,
    /// Whether a `.saturating_mul(..)` modifier was attached (and ignored)
    pub scaled: bool,
}

/// Matches found in one function span.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanMatches<'a> {
    /// Constructors that are not the argument of an accumulation wrapper
    pub direct: Vec<WeightCall<'a>>,
    /// Constructors wrapped in `.saturating_add(..)`
    pub accumulated: Vec<WeightCall<'a>>,
}

/// Stateless matcher over the compiled patterns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionMatcher;

impl ExpressionMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Find direct and accumulated weight constructors in file order.
    ///
    /// A constructor nested in `.saturating_add(..)` is reported once, as an
    /// accumulation, and never again as a direct occurrence.
    pub fn find<'a>(&self, text: &'a str) -> SpanMatches<'a> {
        let accumulated = self.accumulations(text);
        let wrapped: Vec<usize> = accumulated.iter().map(|c| c.offset).collect();

        let direct = self
            .constructors(text)
            .into_iter()
            .filter(|call| !wrapped.contains(&call.offset))
            .collect();

        SpanMatches {
            direct,
            accumulated,
        }
    }

    /// Every `Weight::from_parts(..)` occurrence, wrapped or not.
    pub fn constructors<'a>(&self, text: &'a str) -> Vec<WeightCall<'a>> {
        constructor_pattern()
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some(WeightCall {
                    ref_time: caps.get(1)?.as_str().trim(),
                    proof_size: caps.get(2)?.as_str().trim(),
                    offset: whole.start(),
                    scaled: false,
                })
            })
            .collect()
    }

    /// Every `.saturating_add(Weight::from_parts(..))` occurrence.
    pub fn accumulations<'a>(&self, text: &'a str) -> Vec<WeightCall<'a>> {
        accumulation_pattern()
            .captures_iter(text)
            .filter_map(|caps| {
                Some(WeightCall {
                    ref_time: caps.name("ref_time")?.as_str().trim(),
                    proof_size: caps.name("proof_size")?.as_str().trim(),
                    offset: caps.name("ctor")?.start(),
                    scaled: caps.name("scale").is_some(),
                })
            })
            .collect()
    }
}
