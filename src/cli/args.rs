//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Detect shortcut routes and list them
//! - `generate`: Detect shortcut routes and emit the manifest shortcuts
//! - `init`: Initialize the configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::ManifestFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.common.verbose,
            Some(Command::Generate(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by detection commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root directory (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Route file glob pattern, relative to the root (overrides config file).
    /// Can be specified multiple times.
    #[arg(long = "route-files", value_name = "PATTERN")]
    pub route_files: Vec<String>,

    /// Name of the shortcut declaration function (overrides config file)
    #[arg(long)]
    pub function_name: Option<String>,

    /// Default icon path used when a shortcut declares no icons (overrides config file)
    #[arg(long)]
    pub default_icon: Option<String>,

    /// Exit with status 1 when any route file could not be parsed
    #[arg(long)]
    pub deny_warnings: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = ManifestFormat::Json)]
    pub format: ManifestFormat,

    /// Write the manifest to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Detect shortcut routes and list them
    Scan(ScanCommand),
    /// Generate web manifest shortcuts from detected routes
    Generate(GenerateCommand),
    /// Initialize a new .shortcutsrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
