//! Detection session: the owned, replaceable result of the latest pass.
//!
//! Hosts that re-scan on demand (the MCP server, a watcher) keep one
//! `ShortcutSession` per project. Every pass is numbered when it starts and
//! its result is committed only once the pass has finished, and only if no
//! newer pass was committed in the meantime.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;

use crate::config::ResolvedOptions;
use crate::core::collect::{DetectionOutcome, detect_shortcut_routes};
use crate::core::data::{DetectedShortcut, FileWarning, ManifestEntry};
use crate::core::error::DiscoveryError;
use crate::core::file_scanner::find_route_files;
use crate::core::manifest::generate_manifest;

/// Discover route files under `root` and detect their shortcuts.
///
/// Fails only when the file list itself cannot be produced.
pub fn detect_project(
    root: &Path,
    options: &ResolvedOptions,
    verbose: bool,
) -> Result<DetectionOutcome, DiscoveryError> {
    let scan = find_route_files(root, &options.route_files, verbose)?;
    if scan.skipped_count > 0 && verbose {
        eprintln!(
            "Note: {} path(s) skipped due to access errors",
            scan.skipped_count
        );
    }
    Ok(detect_shortcut_routes(&scan.files, options))
}

/// Result of one committed pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Pass number; 0 means nothing has been committed yet.
    pub generation: u64,
    pub files_scanned: usize,
    pub shortcuts: Vec<DetectedShortcut>,
    pub manifest: Vec<ManifestEntry>,
    pub warnings: Vec<FileWarning>,
}

pub struct ShortcutSession {
    root: PathBuf,
    options: ResolvedOptions,
    next_generation: AtomicU64,
    current: RwLock<Arc<SessionSnapshot>>,
}

impl ShortcutSession {
    pub fn new(root: impl Into<PathBuf>, options: ResolvedOptions) -> Self {
        Self {
            root: root.into(),
            options,
            next_generation: AtomicU64::new(0),
            current: RwLock::new(Arc::new(SessionSnapshot::default())),
        }
    }

    /// Number passes after `generation`, so a session replacing an older one
    /// for the same project keeps generations increasing.
    pub fn starting_after(self, generation: u64) -> Self {
        self.next_generation.store(generation, Ordering::SeqCst);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// Latest committed snapshot.
    pub fn current(&self) -> Arc<SessionSnapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reserve the generation number for a pass that is about to start.
    pub fn begin_pass(&self) -> u64 {
        self.next_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Turn a finished pass into a snapshot for `generation`.
    pub fn snapshot(&self, generation: u64, outcome: DetectionOutcome) -> SessionSnapshot {
        let manifest = generate_manifest(&outcome.shortcuts, &self.options);
        SessionSnapshot {
            generation,
            files_scanned: outcome.files_scanned,
            shortcuts: outcome.shortcuts,
            manifest,
            warnings: outcome.warnings,
        }
    }

    /// Replace the current snapshot unless a newer one is already committed.
    ///
    /// Returns false when the snapshot was stale and has been discarded.
    pub fn commit(&self, snapshot: SessionSnapshot) -> bool {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if snapshot.generation <= current.generation {
            return false;
        }
        *current = Arc::new(snapshot);
        true
    }

    /// Run a full pass and commit it.
    ///
    /// Returns the snapshot current after the commit attempt, which is a newer
    /// pass's result if this one lost the race.
    pub fn rescan(&self) -> Result<Arc<SessionSnapshot>, DiscoveryError> {
        let generation = self.begin_pass();
        let outcome = detect_project(&self.root, &self.options, false)?;
        let snapshot = self.snapshot(generation, outcome);
        self.commit(snapshot);
        Ok(self.current())
    }
}
