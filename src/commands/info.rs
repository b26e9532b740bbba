//! Info command
//!
//! Shows the effective configuration: themes, override directories and
//! registered modules, flagging module directories missing on disk.

use colored::Colorize;
use std::path::PathBuf;

use crate::config;
use crate::error::Result;
use crate::ui as output;
use crate::utils::paths;

pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config_path = match config_path {
        Some(path) => path,
        None => paths::config_file()?,
    };
    let config = config::load_config(&config_path)?;

    output::header("Themes");
    let active = config.active_theme().unwrap_or("(none)").to_string();
    output::keyval("Active", &active);
    for theme in &config.themes {
        if *theme == active {
            output::indent(&format!("{} {}", theme.green(), "(active)".dimmed()), 1);
        } else {
            output::indent(theme, 1);
        }
    }

    output::header("Directories");
    match &config.root_dir {
        Some(root) => output::keyval("Root override", &root.display().to_string()),
        None => output::keyval("Root override", "(none)"),
    }
    if let Some(dir) = &config.default_dir {
        output::keyval("Default dir", &dir.display().to_string());
    }

    output::header("Modules");
    if config.modules.is_empty() {
        output::info("No modules registered");
        return Ok(());
    }

    let mut names: Vec<_> = config.modules.keys().collect();
    names.sort();
    for name in names {
        let dir = &config.modules[name];
        if dir.exists() {
            output::keyval(name, &dir.display().to_string());
        } else {
            output::keyval(name, &format!("{} {}", dir.display(), "(missing)".red()));
        }
    }

    Ok(())
}
