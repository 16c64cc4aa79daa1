use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

pub const CONFIG_FILE_NAME: &str = ".shortcutsrc.json";

pub const DEFAULT_ROUTE_FILES: &str = "src/routes/**/*.{js,jsx,ts,tsx}";
pub const DEFAULT_ICON: &str = "/icons/icon-192.png";
pub const DEFAULT_ICON_SIZES: &[&str] = &["192x192", "512x512"];
pub const DEFAULT_FUNCTION_NAME: &str = "createShortcutRoute";
/// Any identifier ending in "Route", case-insensitively.
pub const DEFAULT_ROUTE_EXPORT_PATTERN: &str = "(?i)route$";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns, relative to the project root, selecting route files.
    #[serde(default = "default_route_files", deserialize_with = "one_or_many")]
    pub route_files: Vec<String>,
    #[serde(default = "default_icon")]
    pub default_icon: String,
    #[serde(default = "default_icon_sizes")]
    pub icon_sizes: Vec<String>,
    #[serde(default = "default_function_name")]
    pub function_name: String,
    /// Regular expression matched against exported variable names.
    #[serde(default = "default_route_export_pattern")]
    pub route_export_pattern: String,
}

fn default_route_files() -> Vec<String> {
    vec![DEFAULT_ROUTE_FILES.to_string()]
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

fn default_icon_sizes() -> Vec<String> {
    DEFAULT_ICON_SIZES.iter().map(|s| s.to_string()).collect()
}

fn default_function_name() -> String {
    DEFAULT_FUNCTION_NAME.to_string()
}

fn default_route_export_pattern() -> String {
    DEFAULT_ROUTE_EXPORT_PATTERN.to_string()
}

/// `routeFiles` may be a single pattern or a list of patterns.
fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    std::result::Result::Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(pattern) if pattern.is_empty() => default_route_files(),
        OneOrMany::One(pattern) => vec![pattern],
        OneOrMany::Many(patterns) => patterns,
    })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            route_files: default_route_files(),
            default_icon: default_icon(),
            icon_sizes: default_icon_sizes(),
            function_name: default_function_name(),
            route_export_pattern: default_route_export_pattern(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the export name pattern is not a valid regex. Route
    /// file globs are checked when they are expanded, as a `DiscoveryError`.
    pub fn validate(&self) -> Result<()> {
        self.export_pattern().map(|_| ())
    }

    fn export_pattern(&self) -> Result<Regex> {
        Regex::new(&self.route_export_pattern).with_context(|| {
            format!(
                "Invalid regular expression in 'routeExportPattern': \"{}\"",
                self.route_export_pattern
            )
        })
    }
}

/// Options for one detection session, with every default filled in.
///
/// Built once per session and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub route_files: Vec<String>,
    pub default_icon: String,
    pub icon_sizes: Vec<String>,
    pub function_name: String,
    pub route_export_pattern: Regex,
}

impl ResolvedOptions {
    /// Resolve a (possibly user-edited) config into session options.
    ///
    /// Empty strings for the icon path and function name fall back to the defaults.
    pub fn resolve(config: &Config) -> Result<Self> {
        let route_export_pattern = config.export_pattern()?;

        Ok(Self {
            route_files: config.route_files.clone(),
            default_icon: non_empty_or(&config.default_icon, DEFAULT_ICON),
            icon_sizes: config.icon_sizes.clone(),
            function_name: non_empty_or(&config.function_name, DEFAULT_FUNCTION_NAME),
            route_export_pattern,
        })
    }
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            route_files: default_route_files(),
            default_icon: default_icon(),
            icon_sizes: default_icon_sizes(),
            function_name: default_function_name(),
            route_export_pattern: Regex::new(DEFAULT_ROUTE_EXPORT_PATTERN)
                .expect("default route export pattern is a valid regex"),
        }
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Look for the config file in `start_dir` and its ancestors.
///
/// The walk stops at the first directory containing `.git`.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
