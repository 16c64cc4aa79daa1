use std::fs;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, GenerateSummary, context::DetectContext};
use crate::{
    cli::args::GenerateCommand,
    core::{generate_manifest, render_manifest},
};

/// Detect shortcut routes and emit the manifest shortcuts.
///
/// If route files cannot be enumerated the manifest is still produced, empty,
/// so a build that embeds it keeps working.
pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let ctx = DetectContext::new(&cmd.common)?;

    let (outcome, discovery_error) = match ctx.detect() {
        Ok(outcome) => (outcome, None),
        Err(err) => (Default::default(), Some(err.to_string())),
    };

    let entries = generate_manifest(&outcome.shortcuts, &ctx.options);
    let rendered = render_manifest(&entries, cmd.format)?;

    if let Some(ref path) = cmd.output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(path, format!("{}\n", rendered))
            .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
    }

    Ok(CommandResult {
        summary: CommandSummary::Generate(GenerateSummary {
            files_scanned: outcome.files_scanned,
            shortcut_count: entries.len(),
            rendered,
            output: cmd.output,
            discovery_error,
        }),
        warnings: outcome.warnings,
        deny_warnings: ctx.deny_warnings,
    })
}
