//! Init command
//!
//! Writes a starter configuration file.

use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::ui as output;
use crate::utils::paths;

#[derive(Debug)]
pub struct InitOptions {
    pub force: bool,
    pub config: Option<PathBuf>,
}

const TEMPLATE: &str = r#"// themeloc configuration

// Global override directory, searched before any module tree (optional)
// root "/srv/app/overrides"

themes active="default" {
    theme "default"
}

modules {
    // module "Admin" "/srv/app/modules/admin"
}

// Base directory for resources outside any module (optional)
// default-dir "/srv/app/resources"
"#;

pub fn run(options: InitOptions) -> Result<()> {
    output::header("Initializing themeloc");

    let config_file = match options.config {
        Some(path) => path,
        None => paths::config_file()?,
    };

    if config_file.exists() && !options.force {
        output::warning("Configuration already exists.");
        output::info(&format!("Location: {}", config_file.display()));
        return Ok(());
    }

    if let Some(parent) = config_file.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
        output::success(&format!("Created config directory: {}", parent.display()));
    }

    fs::write(&config_file, TEMPLATE)?;
    output::success(&format!("Created config file: {}", config_file.display()));

    Ok(())
}
