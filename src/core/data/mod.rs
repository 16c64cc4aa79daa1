//! Core data types used across all pipeline phases.
//!
//! ## Module Structure
//!
//! - `shortcut`: Detected shortcut data (ShortcutConfig, ShortcutIcon, DetectedShortcut)
//! - `manifest`: Normalized output records (ManifestEntry)
//! - `warning`: Per-file warnings collected during a detection pass

pub mod manifest;
pub mod shortcut;
pub mod warning;

pub use manifest::ManifestEntry;
pub use shortcut::{DetectedShortcut, ShortcutConfig, ShortcutIcon};
pub use warning::FileWarning;
