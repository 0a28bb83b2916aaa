//! Function boundary inference.
//!
//! There is no parser here: a function's span runs from its header to the
//! next weight-returning header, or to the end of the file. Code between two
//! weight functions (helpers, impl blocks, tests) is attributed to the
//! preceding function.

use super::matcher::header_pattern;
use crate::models::FunctionSpan;

/// Strategy that splits file text into per-function spans.
///
/// Implementations must return non-overlapping spans in file order.
pub trait Segmenter: Send + Sync {
    fn segment(&self, content: &str) -> Vec<FunctionSpan>;
}

/// Header-to-next-header segmentation over `fn name(..) -> Weight {`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderSegmenter;

impl Segmenter for HeaderSegmenter {
    fn segment(&self, content: &str) -> Vec<FunctionSpan> {
        let headers: Vec<(String, usize)> = header_pattern()
            .captures_iter(content)
            .filter_map(|caps| {
                let start = caps.get(0)?.start();
                Some((caps.get(1)?.as_str().to_string(), start))
            })
            .collect();

        let mut spans = Vec::with_capacity(headers.len());
        let mut line = 1;
        let mut counted_to = 0;

        for (i, (name, start)) in headers.iter().enumerate() {
            line += count_newlines(&content[counted_to..*start]);
            counted_to = *start;

            let end = headers
                .get(i + 1)
                .map(|(_, next)| *next)
                .unwrap_or(content.len());

            spans.push(FunctionSpan {
                name: name.clone(),
                start_offset: *start,
                end_offset: end,
                header_line: line,
            });
        }

        spans
    }
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_FUNCTIONS: &str = "impl WeightInfo for () {\n\
        \tfn first() -> Weight {\n\
        \t\tWeight::from_parts(1, 2)\n\
        \t}\n\
        \tfn second(n: u32, ) -> Weight {\n\
        \t\tWeight::from_parts(3, 4)\n\
        \t}\n\
        }\n";

    #[test]
    fn test_segments_in_file_order() {
        let spans = HeaderSegmenter.segment(TWO_FUNCTIONS);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].name, "first");
        assert_eq!(spans[0].header_line, 2);
        assert_eq!(spans[1].name, "second");
        assert_eq!(spans[1].header_line, 5);
    }

    #[test]
    fn test_spans_are_contiguous() {
        let spans = HeaderSegmenter.segment(TWO_FUNCTIONS);
        assert_eq!(spans[0].end_offset, spans[1].start_offset);
        assert_eq!(spans[1].end_offset, TWO_FUNCTIONS.len());
        assert!(spans[0].text(TWO_FUNCTIONS).starts_with("fn first()"));
        assert!(spans[1].text(TWO_FUNCTIONS).ends_with("}\n}\n"));
    }

    #[test]
    fn test_header_on_first_line() {
        let spans = HeaderSegmenter.segment("fn only() -> Weight { Weight::zero() }");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].header_line, 1);
        assert_eq!(spans[0].start_offset, 0);
    }

    #[test]
    fn test_multiline_parameters() {
        let content = "\n\nfn batch(\n\tn: u32,\n\tm: u32,\n) -> Weight {\n}\n";
        let spans = HeaderSegmenter.segment(content);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].name, "batch");
        assert_eq!(spans[0].header_line, 3);
    }

    #[test]
    fn test_no_headers() {
        let content = "fn helper() -> u64 { 1 }\nconst X: u64 = 2;\n";
        assert!(HeaderSegmenter.segment(content).is_empty());
        assert!(HeaderSegmenter.segment("").is_empty());
    }
}
