use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::core::{DetectedShortcut, FileWarning, ManifestEntry};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetectShortcutsParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetManifestParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: Config,
}

// ============================================================
// Detection Types (detect_shortcuts, get_manifest)
// ============================================================

/// Result of detect_shortcuts: the snapshot committed for the project.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectShortcutsResult {
    pub generation: u64,
    pub files_scanned: usize,
    pub shortcuts: Vec<DetectedShortcut>,
    pub manifest: Vec<ManifestEntry>,
    pub warnings: Vec<FileWarning>,
}

/// Result of get_manifest.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestResult {
    /// Generation of the pass the manifest came from; 0 if never scanned
    pub generation: u64,
    pub manifest: Vec<ManifestEntry>,
}
