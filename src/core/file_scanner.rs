use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use globset::{GlobBuilder, GlobMatcher};
use walkdir::WalkDir;

use crate::core::error::DiscoveryError;

/// Result of scanning for route files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Absolute paths, first-seen order, no duplicates.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Check if a path segment contains glob syntax.
fn is_glob_segment(segment: &str) -> bool {
    segment.contains(['*', '?', '[', '{'])
}

fn normalize_pattern(pattern: &str) -> &str {
    pattern.strip_prefix("./").unwrap_or(pattern)
}

/// Leading segments of a pattern that contain no glob syntax.
///
/// `src/routes/**/*.tsx` walks from `src/routes` instead of the whole project.
fn literal_base(pattern: &str) -> PathBuf {
    let mut base = PathBuf::new();
    if pattern.starts_with('/') {
        base.push("/");
    }
    for segment in pattern.split('/').filter(|s| !s.is_empty()) {
        if is_glob_segment(segment) {
            break;
        }
        base.push(segment);
    }
    base
}

fn compile_pattern(pattern: &str) -> Result<GlobMatcher, DiscoveryError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| DiscoveryError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Expand route file patterns into absolute file paths.
///
/// Relative patterns are resolved against `root`. `*` does not cross `/`,
/// `**` does, and `{a,b}` alternatives are supported. Entries are visited in
/// file name order so repeated scans return the same list. A pattern whose
/// base directory does not exist simply matches nothing.
pub fn find_route_files(
    root: &Path,
    patterns: &[String],
    verbose: bool,
) -> Result<ScanResult, DiscoveryError> {
    let root = root.canonicalize().map_err(|source| DiscoveryError::Root {
        path: root.to_path_buf(),
        source,
    })?;

    let mut result = ScanResult::default();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for pattern in patterns {
        let pattern = normalize_pattern(pattern);
        let matcher = compile_pattern(pattern)?;
        let is_absolute = Path::new(pattern).is_absolute();

        let base = root.join(literal_base(pattern));
        if !base.exists() {
            continue;
        }

        for entry in WalkDir::new(&base).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    result.skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let candidate = if is_absolute {
                path
            } else {
                path.strip_prefix(&root).unwrap_or(path)
            };

            if matcher.is_match(candidate) && seen.insert(path.to_path_buf()) {
                result.files.push(entry.into_path());
            }
        }
    }

    Ok(result)
}
