//! Core data models for the weight scanner
//!
//! These models are shared between the scanner, which produces them, and the
//! reporters, which rank and render them.

use serde::{Deserialize, Serialize};

/// Aggregated weight of one function that declares a `Weight` return type.
///
/// A result only exists for functions whose totals are not both zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightResult {
    pub file_path: String,
    /// 1-based line of the function header
    pub line_number: usize,
    pub function_name: String,
    pub ref_time: u64,
    pub proof_size: u64,
    /// Every contributing sub-expression, joined with ` + `
    pub raw_expression: String,
    /// True when a symbolic operand resolved to zero or a scale modifier was
    /// ignored, so the totals under-count the real weight.
    #[serde(default)]
    pub lower_bound: bool,
}

impl WeightResult {
    /// Location reference in `path#Lline` form (clickable in VS Code)
    pub fn location(&self) -> String {
        format_file_link(&self.file_path, self.line_number)
    }
}

/// Format a file link for click-to-jump in editors.
pub fn format_file_link(file_path: &str, line_number: usize) -> String {
    format!("{}#L{}", file_path, line_number)
}

/// Text region attributed to one function, from its header to the next
/// header (or end of file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSpan {
    pub name: String,
    /// Byte offset of the header start
    pub start_offset: usize,
    /// Exclusive byte offset where the span ends
    pub end_offset: usize,
    /// 1-based line of the header
    pub header_line: usize,
}

impl FunctionSpan {
    /// Slice of `content` covered by this span
    pub fn text<'a>(&self, content: &'a str) -> &'a str {
        &content[self.start_offset..self.end_offset]
    }
}

/// Totals and display expressions produced by aggregating one span.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightTotals {
    pub ref_time: u64,
    pub proof_size: u64,
    pub expressions: Vec<String>,
    pub lower_bound: bool,
}

impl WeightTotals {
    pub fn is_zero(&self) -> bool {
        self.ref_time == 0 && self.proof_size == 0
    }
}
