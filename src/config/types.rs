use std::collections::HashMap;
use std::path::PathBuf;

/// Parsed configuration file contents.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global override directory, the highest priority search tier
    pub root_dir: Option<PathBuf>,
    /// Explicitly configured active theme
    pub active_theme: Option<String>,
    /// All known themes, in fallback priority order
    pub themes: Vec<String>,
    /// Module name -> module base directory
    pub modules: HashMap<String, PathBuf>,
    /// Base directory used when `locate` is called without `--dir`
    pub default_dir: Option<PathBuf>,
}

impl Config {
    /// Active theme, falling back to the first configured theme.
    pub fn active_theme(&self) -> Option<&str> {
        self.active_theme
            .as_deref()
            .or_else(|| self.themes.first().map(|s| s.as_str()))
    }
}
