pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod modules;
pub mod traits;
pub mod ui;
pub mod utils;

pub use crate::core::{ActiveTheme, Located, ResourceLocator};
pub use crate::error::{Result, ThemelocError};
pub use crate::modules::StaticRegistry;
pub use crate::traits::ModuleRegistry;

use clap::Parser;
use std::process::exit;

/// Run themeloc CLI entrypoint.
pub fn run_cli() {
    ui::init_colors();

    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}
