//! Shortcut metadata as declared in source code.
//!
//! These types mirror what a route file writes inside
//! `createShortcutRoute("/path")({ ... })`. Nothing here is defaulted: a field
//! that the source did not provide as a string literal stays `None` and is
//! omitted from serialized output.

use serde::{Deserialize, Serialize};

/// One icon of a shortcut.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutIcon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

/// Shortcut configuration extracted from the config object literal.
///
/// `name` is always non-empty: the extractor refuses to build a config
/// without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `Some(vec![])` when the source wrote `icons: []`, `None` when the key was absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<Vec<ShortcutIcon>>,
}

/// A shortcut route found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedShortcut {
    /// Route path, e.g. `/cart`. Never empty.
    pub path: String,
    pub config: ShortcutConfig,
    /// File the declaration was found in.
    #[serde(rename = "file")]
    pub file_path: String,
}
