use anyhow::Result;

use super::{CommandResult, CommandSummary, ScanSummary, context::DetectContext};
use crate::cli::args::ScanCommand;

/// Detect shortcut routes and report them.
///
/// Unlike `generate`, a route file pattern that cannot be expanded is an error
/// here: there is no manifest to fall back to.
pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let ctx = DetectContext::new(&cmd.common)?;
    let outcome = ctx.detect()?;

    Ok(CommandResult {
        summary: CommandSummary::Scan(ScanSummary {
            root: ctx.display_root(),
            files_scanned: outcome.files_scanned,
            shortcuts: outcome.shortcuts,
        }),
        warnings: outcome.warnings,
        deny_warnings: ctx.deny_warnings,
    })
}
