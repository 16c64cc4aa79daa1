//! Manifest generation.
//!
//! Maps detected shortcuts one-to-one onto `ManifestEntry` records, filling in
//! defaults for every optional field, and renders them for the packaging step.

use anyhow::{Context, Result};

use crate::config::ResolvedOptions;
use crate::core::data::{DetectedShortcut, ManifestEntry, ShortcutIcon};

/// Default `short_name` length, in characters.
pub const SHORT_NAME_MAX_CHARS: usize = 12;

pub const DEFAULT_ICON_TYPE: &str = "image/png";

/// Placeholder in the default icon path replaced by each size's width.
const ICON_SIZE_PLACEHOLDER: &str = "192";

/// Output format for a rendered manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ManifestFormat {
    /// Plain JSON array
    #[default]
    Json,
    /// ES module with the JSON array as its default export
    Module,
}

/// Build the manifest entries for a list of shortcuts.
///
/// Same length and order as the input. Each entry is defaulted independently.
pub fn generate_manifest(
    shortcuts: &[DetectedShortcut],
    options: &ResolvedOptions,
) -> Vec<ManifestEntry> {
    shortcuts
        .iter()
        .map(|shortcut| manifest_entry(shortcut, options))
        .collect()
}

fn manifest_entry(shortcut: &DetectedShortcut, options: &ResolvedOptions) -> ManifestEntry {
    let config = &shortcut.config;
    let name = config.name.clone();

    let short_name = config
        .short_name
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| name.chars().take(SHORT_NAME_MAX_CHARS).collect());

    let description = config
        .description
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| format!("Go to {}", name));

    // An explicit `icons: []` counts as present.
    let icons = config
        .icons
        .clone()
        .unwrap_or_else(|| default_icons(options));

    ManifestEntry {
        name,
        short_name,
        description,
        url: shortcut.path.clone(),
        icons,
    }
}

/// One PNG icon per configured size, derived from the default icon path.
///
/// `/icons/icon-192.png` with size `512x512` becomes `/icons/icon-512.png`.
pub fn default_icons(options: &ResolvedOptions) -> Vec<ShortcutIcon> {
    options
        .icon_sizes
        .iter()
        .map(|size| {
            let width = size.split('x').next().unwrap_or(size);
            ShortcutIcon {
                src: Some(
                    options
                        .default_icon
                        .replacen(ICON_SIZE_PLACEHOLDER, width, 1),
                ),
                sizes: Some(size.clone()),
                mime_type: Some(DEFAULT_ICON_TYPE.to_string()),
                purpose: None,
            }
        })
        .collect()
}

/// Render manifest entries as pretty JSON (2-space indent), optionally
/// wrapped as an ES module default export.
pub fn render_manifest(entries: &[ManifestEntry], format: ManifestFormat) -> Result<String> {
    let json = serde_json::to_string_pretty(entries).context("Failed to serialize manifest")?;
    Ok(match format {
        ManifestFormat::Json => json,
        ManifestFormat::Module => format!("export default {}", json),
    })
}
