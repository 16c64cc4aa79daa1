//! Shortcut collection across a set of route files.
//!
//! Files are read and parsed one after another, in the order given. A file
//! that fails to read or parse becomes a `FileWarning` and the pass moves on
//! to the next file; each syntax tree is dropped as soon as its shortcuts
//! have been extracted.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ResolvedOptions;
use crate::core::data::{DetectedShortcut, FileWarning};
use crate::core::error::{ParseError, SourceError};
use crate::core::extract::RouteCollector;
use crate::core::parsers::source::parse_source;

/// Output of one detection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionOutcome {
    /// Number of files the pass attempted.
    pub files_scanned: usize,
    /// Shortcuts in file order, then declaration order.
    pub shortcuts: Vec<DetectedShortcut>,
    /// Files that were skipped.
    pub warnings: Vec<FileWarning>,
}

/// Parse one file's source and extract its shortcut routes.
pub fn parse_shortcut_routes(
    code: String,
    file_path: &str,
    options: &ResolvedOptions,
) -> Result<Vec<DetectedShortcut>, ParseError> {
    let parsed = parse_source(code, file_path)?;
    Ok(RouteCollector::new(&parsed.file_path, options).collect(&parsed.module))
}

fn detect_in_file(
    path: &Path,
    options: &ResolvedOptions,
) -> Result<Vec<DetectedShortcut>, SourceError> {
    let file_path = path.to_string_lossy().to_string();
    let code = fs::read_to_string(path).map_err(|source| SourceError::Read {
        file_path: file_path.clone(),
        source,
    })?;
    Ok(parse_shortcut_routes(code, &file_path, options)?)
}

/// Detect shortcut routes in every file.
///
/// Never fails as a whole: per-file failures end up in `warnings`.
pub fn detect_shortcut_routes(file_paths: &[PathBuf], options: &ResolvedOptions) -> DetectionOutcome {
    let mut outcome = DetectionOutcome {
        files_scanned: file_paths.len(),
        ..Default::default()
    };

    for path in file_paths {
        match detect_in_file(path, options) {
            Ok(shortcuts) => outcome.shortcuts.extend(shortcuts),
            Err(err) => outcome.warnings.push(err.into()),
        }
    }

    outcome
}
