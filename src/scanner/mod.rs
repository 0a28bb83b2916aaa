//! Weight scanning pipeline
//!
//! ```text
//! path ──> files ──> Segmenter ──> aggregate ──> WeightResult[]
//!                    (spans)       (matcher + extract)
//! ```
//!
//! `WeightScanner` is a stateless service: build it once, call `scan` as many
//! times as needed. Every call returns fresh results.

mod aggregate;
mod extract;
mod files;
mod matcher;
mod segment;

pub use aggregate::aggregate;
pub use extract::{resolve, resolve_literal};
pub use files::{collect_source_files, has_source_extension};
pub use matcher::{ExpressionMatcher, SpanMatches, WeightCall};
pub use segment::{HeaderSegmenter, Segmenter};

use crate::config::ProjectConfig;
use crate::models::WeightResult;

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors for a single file. They never abort a directory scan.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

pub type ScanResult<T> = Result<T, ScanError>;

/// Settings that control which files a scan visits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Recognized source extensions (without the dot)
    pub extensions: Vec<String>,
    /// Honour hidden-file rules and .gitignore/.ignore files while walking
    pub respect_ignore_files: bool,
    /// Glob patterns, matched against paths relative to the scan root
    pub exclude: Vec<String>,
    /// Parallel file workers (1 = sequential)
    pub workers: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["rs".to_string()],
            respect_ignore_files: false,
            exclude: Vec::new(),
            workers: 1,
        }
    }
}

impl ScanOptions {
    pub fn from_config(config: &ProjectConfig, workers: usize) -> Self {
        Self {
            extensions: config.scan.effective_extensions(),
            respect_ignore_files: config.scan.respect_ignore_files,
            exclude: config.exclude.paths.clone(),
            workers: workers.max(1),
        }
    }
}

/// Scans files for `Weight::from_parts` expressions grouped by function.
pub struct WeightScanner {
    matcher: ExpressionMatcher,
    segmenter: Box<dyn Segmenter>,
    options: ScanOptions,
}

impl Default for WeightScanner {
    fn default() -> Self {
        Self::new(ScanOptions::default())
    }
}

impl WeightScanner {
    pub fn new(options: ScanOptions) -> Self {
        Self {
            matcher: ExpressionMatcher::new(),
            segmenter: Box::new(HeaderSegmenter),
            options,
        }
    }

    /// Replace the function boundary strategy.
    pub fn with_segmenter(mut self, segmenter: Box<dyn Segmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan a single source file or every source file under a directory.
    ///
    /// The caller is expected to have checked that `path` exists. Unreadable
    /// files are logged and skipped.
    pub fn scan(&self, path: &Path) -> Vec<WeightResult> {
        if path.is_file() {
            if has_source_extension(path, &self.options.extensions) {
                return self.scan_file_or_warn(path);
            }
            debug!("Skipping {}: not a recognized source file", path.display());
            return Vec::new();
        }

        if !path.is_dir() {
            return Vec::new();
        }

        let files = collect_source_files(path, &self.options);
        self.scan_files(&files)
    }

    /// Scan files and concatenate results in the order given.
    pub fn scan_files(&self, files: &[PathBuf]) -> Vec<WeightResult> {
        if self.options.workers <= 1 || files.len() <= 1 {
            return files
                .iter()
                .flat_map(|file| self.scan_file_or_warn(file))
                .collect();
        }

        let pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.workers)
            .build()
        {
            Ok(pool) => pool,
            Err(e) => {
                warn!("Failed to start worker pool, scanning sequentially: {}", e);
                return files
                    .iter()
                    .flat_map(|file| self.scan_file_or_warn(file))
                    .collect();
            }
        };

        // Indexed collect keeps walk order, so ranking ties stay deterministic
        let per_file: Vec<Vec<WeightResult>> = pool.install(|| {
            files
                .par_iter()
                .map(|file| self.scan_file_or_warn(file))
                .collect()
        });

        per_file.into_iter().flatten().collect()
    }

    /// Read and parse one file.
    pub fn scan_file(&self, path: &Path) -> ScanResult<Vec<WeightResult>> {
        let bytes = std::fs::read(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8(bytes).map_err(|source| ScanError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(self.parse_function_weights(&content, &path.display().to_string()))
    }

    fn scan_file_or_warn(&self, path: &Path) -> Vec<WeightResult> {
        match self.scan_file(path) {
            Ok(results) => results,
            Err(e) => {
                warn!("Failed to parse {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    /// Attribute weights in `content` to their functions.
    ///
    /// Functions whose totals are both zero produce no result.
    pub fn parse_function_weights(&self, content: &str, file_path: &str) -> Vec<WeightResult> {
        self.segmenter
            .segment(content)
            .into_iter()
            .filter_map(|span| {
                let totals = aggregate(&self.matcher, span.text(content));
                if totals.is_zero() {
                    return None;
                }
                Some(WeightResult {
                    file_path: file_path.to_string(),
                    line_number: span.header_line,
                    function_name: span.name,
                    ref_time: totals.ref_time,
                    proof_size: totals.proof_size,
                    raw_expression: totals.expressions.join(" + "),
                    lower_bound: totals.lower_bound,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FunctionSpan;

    const WEIGHTS_RS: &str = r#"
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	fn transfer() -> Weight {
		Weight::from_parts(1_000_000, 2_000)
	}
	fn set_code(s: u32, ) -> Weight {
		Weight::from_parts(
			20_000,
			300
		)
		.saturating_add(Weight::from_parts(1_500, 0).saturating_mul(s.into()))
	}
	fn noop() -> Weight {
		Weight::zero()
	}
}
"#;

    #[test]
    fn test_parse_function_weights() {
        let scanner = WeightScanner::default();
        let results = scanner.parse_function_weights(WEIGHTS_RS, "weights.rs");

        assert_eq!(results.len(), 2, "noop has no weight and is skipped");

        assert_eq!(results[0].function_name, "transfer");
        assert_eq!(results[0].line_number, 3);
        assert_eq!(results[0].ref_time, 1_000_000);
        assert_eq!(results[0].proof_size, 2_000);
        assert_eq!(
            results[0].raw_expression,
            "Weight::from_parts(1_000_000, 2_000)"
        );
        assert!(!results[0].lower_bound);

        assert_eq!(results[1].function_name, "set_code");
        assert_eq!(results[1].line_number, 6);
        assert_eq!(results[1].ref_time, 21_500);
        assert_eq!(results[1].proof_size, 300);
        assert!(results[1].lower_bound);
    }

    #[test]
    fn test_trailing_comma_operand_is_unresolved() {
        let content = "fn f() -> Weight {\n\tWeight::from_parts(\n\t\t20_000,\n\t\t300,\n\t)\n}";
        let results = WeightScanner::default().parse_function_weights(content, "a.rs");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].ref_time, 20_000);
        assert_eq!(results[0].proof_size, 0);
        assert!(results[0].lower_bound);
    }

    #[test]
    fn test_no_headers_is_empty_and_idempotent() {
        let scanner = WeightScanner::default();
        let content = "pub const X: u64 = Weight::from_parts(1, 1);";
        assert!(scanner.parse_function_weights(content, "a.rs").is_empty());
        assert!(scanner.parse_function_weights(content, "a.rs").is_empty());
    }

    struct WholeFile;

    impl Segmenter for WholeFile {
        fn segment(&self, content: &str) -> Vec<FunctionSpan> {
            vec![FunctionSpan {
                name: "file".into(),
                start_offset: 0,
                end_offset: content.len(),
                header_line: 1,
            }]
        }
    }

    #[test]
    fn test_custom_segmenter() {
        let scanner = WeightScanner::default().with_segmenter(Box::new(WholeFile));
        let results = scanner.parse_function_weights(WEIGHTS_RS, "weights.rs");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].function_name, "file");
        assert_eq!(results[0].ref_time, 1_021_500);
    }

    #[test]
    fn test_scan_skips_undecodable_file() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        std::fs::write(dir.path().join("a_broken.rs"), [0xff, 0xfe, 0x00, 0x80])
            .expect("should write broken file");
        std::fs::write(dir.path().join("b_weights.rs"), WEIGHTS_RS)
            .expect("should write weights file");

        let scanner = WeightScanner::default();
        assert!(matches!(
            scanner.scan_file(&dir.path().join("a_broken.rs")),
            Err(ScanError::Decode { .. })
        ));

        let results = scanner.scan(dir.path());
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.file_path.ends_with("b_weights.rs")));
    }

    #[test]
    fn test_scan_missing_file_is_read_error() {
        let scanner = WeightScanner::default();
        let missing = Path::new("/definitely/not/here.rs");
        assert!(matches!(
            scanner.scan_file(missing),
            Err(ScanError::Read { .. })
        ));
    }

    #[test]
    fn test_scan_single_file_requires_extension() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let txt = dir.path().join("weights.txt");
        std::fs::write(&txt, WEIGHTS_RS).expect("should write file");
        assert!(WeightScanner::default().scan(&txt).is_empty());

        let rs = dir.path().join("weights.rs");
        std::fs::write(&rs, WEIGHTS_RS).expect("should write file");
        assert_eq!(WeightScanner::default().scan(&rs).len(), 2);
    }

    #[test]
    fn test_parallel_scan_keeps_walk_order() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        for i in 0..8 {
            let body = format!(
                "fn f{i}() -> Weight {{\n\tWeight::from_parts(100, 1)\n}}\n"
            );
            std::fs::write(dir.path().join(format!("w{i}.rs")), body)
                .expect("should write file");
        }

        let sequential = WeightScanner::default().scan(dir.path());
        let parallel = WeightScanner::new(ScanOptions {
            workers: 4,
            ..Default::default()
        })
        .scan(dir.path());

        assert_eq!(sequential.len(), 8);
        assert_eq!(sequential, parallel);
    }
}
