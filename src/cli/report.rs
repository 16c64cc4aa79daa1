//! Report formatting and printing.
//!
//! Human-readable output goes to stdout, warnings and notes to stderr. The
//! generated manifest itself is printed bare so `generate > manifest.json`
//! produces a clean file.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, GenerateSummary, InitSummary, ScanSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::FileWarning;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Scan(summary) => print_scan(summary, &mut io::stdout().lock()),
        CommandSummary::Generate(summary) => print_generate(summary, verbose),
        CommandSummary::Init(summary) => print_init(summary),
    }

    print_warnings_to(&result.warnings, &mut io::stderr().lock());
}

/// Print one warning per skipped file.
pub fn print_warnings_to<W: Write>(warnings: &[FileWarning], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning.message);
    }
}

fn print_scan<W: Write>(summary: &ScanSummary, writer: &mut W) {
    let url_width = summary
        .shortcuts
        .iter()
        .map(|s| s.path.chars().count())
        .max()
        .unwrap_or(0);

    for shortcut in &summary.shortcuts {
        let _ = writeln!(
            writer,
            "  {:<width$}  {}  {}",
            shortcut.path.cyan(),
            shortcut.config.name,
            format!("({})", display_path(&summary.root, &shortcut.file_path)).dimmed(),
            width = url_width
        );
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        found_message(summary.shortcuts.len(), summary.files_scanned).green()
    );
}

fn print_generate(summary: &GenerateSummary, verbose: bool) {
    if let Some(ref err) = summary.discovery_error {
        eprintln!(
            "{} {} (emitting an empty manifest)",
            "warning:".bold().yellow(),
            err
        );
    }

    match summary.output {
        Some(ref path) => {
            println!(
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Wrote {} {} to {}",
                    summary.shortcut_count,
                    plural(summary.shortcut_count, "shortcut", "shortcuts"),
                    path.display()
                )
                .green()
            );
        }
        None => {
            println!("{}", summary.rendered);
        }
    }

    if verbose {
        eprintln!(
            "Note: {}",
            found_message(summary.shortcut_count, summary.files_scanned)
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn found_message(shortcuts: usize, files: usize) -> String {
    format!(
        "Found {} {} in {} route {}",
        shortcuts,
        plural(shortcuts, "shortcut", "shortcuts"),
        files,
        plural(files, "file", "files")
    )
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

/// Show a file relative to the project root when it lives under it.
fn display_path(root: &Path, file_path: &str) -> String {
    Path::new(file_path)
        .strip_prefix(root)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| file_path.to_string())
}
