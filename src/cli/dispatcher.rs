//! Command dispatcher
//!
//! Routes CLI commands to their appropriate handlers.

use clap::CommandFactory;

use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::error::Result;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    match &args.command {
        Some(Command::Locate {
            resource,
            dir,
            all,
            theme,
            output,
        }) => commands::locate::run(commands::locate::LocateOptions {
            resource: resource.clone(),
            dir: dir.clone(),
            all: *all,
            theme: theme.clone(),
            output: output.clone(),
            config: args.global.config.clone(),
        }),

        Some(Command::Info) => commands::info::run(args.global.config.clone()),

        Some(Command::Init { force }) => commands::init::run(commands::init::InitOptions {
            force: *force,
            config: args.global.config.clone(),
        }),

        Some(Command::Completions { shell }) => commands::completions::run(*shell),

        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
