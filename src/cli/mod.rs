use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

/// Dispatches a parsed command; prints help when no command was given.
pub fn run_cli(args: Arguments) -> Result<()> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(());
    };

    match args.command {
        Some(Command::Compile(cmd)) => commands::compile::compile(cmd),
        Some(Command::GetIds(cmd)) => commands::getids::getids(cmd),
        None => Ok(()),
    }
}
