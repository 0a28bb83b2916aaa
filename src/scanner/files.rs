//! Source file discovery for directory scans.

use super::ScanOptions;
use crate::config::glob_match;

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Whether `path` carries one of the recognized source extensions.
pub fn has_source_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| extensions.iter().any(|allowed| allowed == ext))
        .unwrap_or(false)
}

/// Recursively collect every recognized source file under `root`.
///
/// Files come back in walk order (sorted by file name within each
/// directory). Hidden files and ignore files are only honoured when
/// `respect_ignore_files` is set.
pub fn collect_source_files(root: &Path, options: &ScanOptions) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(options.respect_ignore_files)
        .require_git(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to read directory entry under {}: {}", root.display(), e);
                continue;
            }
        };
        let path = entry.path();

        if !path.is_file() || !has_source_extension(path, &options.extensions) {
            continue;
        }

        if is_excluded(root, path, &options.exclude) {
            debug!("Excluded {}", path.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    debug!("Found {} source files under {}", files.len(), root.display());
    files
}

/// Match exclusion patterns against the path relative to the scan root.
fn is_excluded(root: &Path, path: &Path, patterns: &[String]) -> bool {
    if patterns.is_empty() {
        return false;
    }
    let relative = path.strip_prefix(root).unwrap_or(path);
    let path_str = relative.to_string_lossy().replace('\\', "/");
    patterns.iter().any(|pattern| glob_match(pattern, &path_str))
}
