//! Core detection engine.
//!
//! The pipeline runs in this order for every pass:
//!
//! 1. **Discovery** (`file_scanner`): route file patterns → absolute file paths
//! 2. **Parsing** (`parsers`): file text → swc module
//! 3. **Extraction** (`extract`): module → shortcut declarations
//! 4. **Collection** (`collect`): per-file results → one ordered list
//! 5. **Generation** (`manifest`): shortcuts → defaulted manifest entries
//!
//! `session` owns the latest result for hosts that re-scan.

pub mod collect;
pub mod data;
pub mod error;
pub mod extract;
pub mod file_scanner;
pub mod manifest;
pub mod parsers;
pub mod session;

pub use collect::{DetectionOutcome, detect_shortcut_routes, parse_shortcut_routes};
pub use data::{DetectedShortcut, FileWarning, ManifestEntry, ShortcutConfig, ShortcutIcon};
pub use error::{DiscoveryError, ParseError, SourceError};
pub use manifest::{ManifestFormat, generate_manifest, render_manifest};
pub use session::{SessionSnapshot, ShortcutSession, detect_project};
