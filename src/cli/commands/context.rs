use std::path::PathBuf;

use anyhow::Result;

use crate::{
    cli::args::CommonArgs,
    config::{Config, ResolvedOptions, load_config},
    core::{DetectionOutcome, DiscoveryError, detect_project},
};

/// Everything a detection command needs, resolved once.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (e.g., `--function-name defineShortcut`)
/// 2. `.shortcutsrc.json` config file
/// 3. Built-in defaults
pub struct DetectContext {
    /// Project root directory (route file patterns are relative to it).
    pub root: PathBuf,
    pub options: ResolvedOptions,
    pub verbose: bool,
    pub deny_warnings: bool,
}

impl DetectContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root)?;
        if verbose && !config_result.from_file {
            eprintln!("Note: No .shortcutsrc.json found, using default configuration");
        }

        let mut config = config_result.config;
        apply_overrides(&mut config, common_args);
        let options = ResolvedOptions::resolve(&config)?;

        Ok(Self {
            root,
            options,
            verbose,
            deny_warnings: common_args.deny_warnings,
        })
    }

    /// Run one detection pass over the project.
    pub fn detect(&self) -> Result<DetectionOutcome, DiscoveryError> {
        detect_project(&self.root, &self.options, self.verbose)
    }

    /// Canonical root for display, falling back to the root as given.
    pub fn display_root(&self) -> PathBuf {
        self.root
            .canonicalize()
            .unwrap_or_else(|_| self.root.clone())
    }
}

fn apply_overrides(config: &mut Config, common_args: &CommonArgs) {
    if !common_args.route_files.is_empty() {
        config.route_files = common_args.route_files.clone();
    }
    if let Some(ref function_name) = common_args.function_name {
        config.function_name = function_name.clone();
    }
    if let Some(ref default_icon) = common_args.default_icon {
        config.default_icon = default_icon.clone();
    }
}
