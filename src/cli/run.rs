use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, generate::generate, init::init, scan::scan},
};

/// Dispatch to the command handler for the parsed arguments.
///
/// `serve` never reaches this point; `main` starts the MCP server directly.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
