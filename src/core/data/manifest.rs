use serde::{Deserialize, Serialize};

use super::ShortcutIcon;

/// Fully defaulted shortcut record, as embedded in a web app manifest.
///
/// Field order matches the serialized JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub url: String,
    pub icons: Vec<ShortcutIcon>,
}
