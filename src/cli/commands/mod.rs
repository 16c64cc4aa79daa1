pub mod context;
pub mod generate;
pub mod init;
pub mod scan;

use std::path::PathBuf;

use super::exit_status::ExitStatus;
use crate::core::{DetectedShortcut, FileWarning};

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Generate(GenerateSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    /// Canonical project root, used to shorten file paths in output.
    pub root: PathBuf,
    pub files_scanned: usize,
    pub shortcuts: Vec<DetectedShortcut>,
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub files_scanned: usize,
    pub shortcut_count: usize,
    /// Rendered manifest (JSON or ES module).
    pub rendered: String,
    /// File the manifest was written to; `None` means stdout.
    pub output: Option<PathBuf>,
    /// Set when route files could not be enumerated and an empty manifest was produced.
    pub discovery_error: Option<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a command.
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Route files skipped during detection.
    pub warnings: Vec<FileWarning>,
    /// If true, warnings turn the exit status into `Failure`.
    pub deny_warnings: bool,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.deny_warnings && !self.warnings.is_empty() {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
