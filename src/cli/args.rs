use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "themeloc",
    about = "Theme-aware resource locator",
    long_about = "Resolves symbolic module resources to concrete file paths, searching theme \
                  overrides before stock resources",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Path to the configuration file
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a resource reference to a file path
    Locate {
        /// Resource reference, e.g. "@Admin/Resources/views/index.html"
        resource: String,

        /// Base directory for the default search tiers (falls back to the
        /// configured default-dir, then the current directory)
        #[arg(short = 'd', long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// List every existing candidate instead of the first hit
        #[arg(short = 'a', long)]
        all: bool,

        /// Override the configured active theme for this call
        #[arg(short = 't', long, value_name = "NAME")]
        theme: Option<String>,

        /// Machine readable output format ("json")
        #[arg(long, value_name = "FORMAT")]
        output: Option<String>,
    },

    /// Show configured themes, modules and override directories
    Info,

    /// Write a starter configuration file
    Init {
        /// Overwrite an existing configuration
        #[arg(short = 'f', long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
