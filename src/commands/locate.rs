//! Locate command
//!
//! Resolves a resource reference against the configured module registry
//! and theme state, printing the winning path (or every existing
//! candidate with --all).

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config;
use crate::core::{ActiveTheme, ResourceLocator};
use crate::error::{Result, ThemelocError};
use crate::modules::StaticRegistry;
use crate::utils::{machine_output, paths};

pub struct LocateOptions {
    pub resource: String,
    pub dir: Option<PathBuf>,
    pub all: bool,
    pub theme: Option<String>,
    pub output: Option<String>,
    pub config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct LocateReport {
    resource: String,
    theme: String,
    paths: Vec<PathBuf>,
}

pub fn run(options: LocateOptions) -> Result<()> {
    let LocateOptions {
        resource,
        dir,
        all,
        theme,
        output,
        config,
    } = options;

    let config_path = match config {
        Some(path) => path,
        None => paths::config_file()?,
    };
    let config = config::load_config(&config_path)?;

    let active = theme
        .or_else(|| config.active_theme().map(|s| s.to_string()))
        .unwrap_or_default();

    let theme = Arc::new(ActiveTheme::new(active, config.themes.clone()));
    let registry = Arc::new(StaticRegistry::from(config.modules));
    let locator = ResourceLocator::new(theme, registry, config.root_dir);

    let default_dir = match dir.or(config.default_dir) {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let located = locator.locate(&resource, &default_dir, !all)?;
    let paths = located.into_paths();

    match output.as_deref() {
        Some("json") => {
            let report = LocateReport {
                resource,
                theme: locator.last_theme(),
                paths,
            };
            machine_output::emit_v1("locate", report, vec![], vec![])
        }
        Some(other) => Err(ThemelocError::Other(format!(
            "Unsupported output format: {}",
            other
        ))),
        None => {
            for path in &paths {
                println!("{}", path.display());
            }
            Ok(())
        }
    }
}
