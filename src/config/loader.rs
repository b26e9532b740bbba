use kdl::{KdlDocument, KdlNode};
use std::fs;
use std::path::Path;

use crate::config::types::Config;
use crate::error::{Result, ThemelocError};
use crate::utils::paths;

/// Load and parse a configuration file.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(ThemelocError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| ThemelocError::IoError {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&content)
}

/// Parse configuration from KDL text.
///
/// Supported nodes:
/// ```kdl
/// root "/srv/app/overrides"
///
/// themes active="dark" {
///     theme "default"
///     theme "dark"
/// }
///
/// modules {
///     module "Admin" "/srv/app/modules/admin"
///     Shop "/srv/app/modules/shop"
/// }
///
/// default-dir "/srv/app/resources"
/// ```
pub fn parse_config(content: &str) -> Result<Config> {
    let doc: KdlDocument = content.parse().map_err(|e: kdl::KdlError| {
        // Provide more helpful error messages for common KDL syntax issues
        let err_msg = e.to_string();
        let hint = if err_msg.contains("unexpected token") {
            "\nHint: Check for missing quotes, unmatched brackets, or invalid characters."
        } else if err_msg.contains("unexpected end of file") {
            "\nHint: You might be missing a closing brace '}'."
        } else {
            ""
        };

        ThemelocError::ConfigError(format!("KDL parsing error: {}{}", err_msg, hint))
    })?;

    let mut config = Config::default();

    for node in doc.nodes() {
        match node.name().value() {
            "root" => {
                config.root_dir = expand_first_string(node)?;
            }
            "default-dir" => {
                config.default_dir = expand_first_string(node)?;
            }
            "themes" => {
                parse_themes_node(node, &mut config);
            }
            "modules" => {
                parse_modules_node(node, &mut config)?;
            }
            // Top-level module entries are also accepted
            "module" => {
                parse_module_entry(node, &mut config)?;
            }
            "description" => {
                // No-op, just ignore description nodes
            }
            _ => {}
        }
    }

    Ok(config)
}

/// Parse the themes node
///
/// The active theme comes from the `active` property; theme names come
/// from inline string arguments or `theme` children.
fn parse_themes_node(node: &KdlNode, config: &mut Config) {
    for entry in node.entries() {
        match entry.name().map(|n| n.value()) {
            Some("active") => {
                if let Some(val) = entry.value().as_string() {
                    config.active_theme = Some(val.to_string());
                }
            }
            None => {
                if let Some(val) = entry.value().as_string() {
                    config.themes.push(val.to_string());
                }
            }
            _ => {}
        }
    }

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "theme" => {
                    for entry in child.entries() {
                        if let Some(val) = entry.value().as_string() {
                            config.themes.push(val.to_string());
                        }
                    }
                }
                // Bare child name - treat as a theme name
                other => config.themes.push(other.to_string()),
            }
        }
    }
}

fn parse_modules_node(node: &KdlNode, config: &mut Config) -> Result<()> {
    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "module" => parse_module_entry(child, config)?,
                // Name "path" shorthand
                name => {
                    let Some(dir) = first_string(child) else {
                        return Err(ThemelocError::ConfigError(format!(
                            "Module '{}' is missing its directory",
                            name
                        )));
                    };
                    insert_module(config, name, &dir)?;
                }
            }
        }
    }
    Ok(())
}

fn parse_module_entry(node: &KdlNode, config: &mut Config) -> Result<()> {
    let values: Vec<_> = node
        .entries()
        .iter()
        .filter_map(|e| e.value().as_string())
        .collect();

    if values.len() != 2 {
        return Err(ThemelocError::ConfigError(
            "module entries need a name and a directory: module \"Name\" \"/path\"".to_string(),
        ));
    }

    insert_module(config, values[0], values[1])
}

fn insert_module(config: &mut Config, name: &str, dir: &str) -> Result<()> {
    let dir = paths::expand_home(Path::new(dir))?;
    config.modules.insert(name.to_string(), dir);
    Ok(())
}

fn first_string(node: &KdlNode) -> Option<String> {
    node.entries()
        .iter()
        .filter_map(|e| e.value().as_string())
        .next()
        .map(|s| s.to_string())
}

fn expand_first_string(node: &KdlNode) -> Result<Option<std::path::PathBuf>> {
    match first_string(node) {
        Some(raw) => Ok(Some(paths::expand_home(Path::new(&raw))?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parses_full_config() {
        let content = r#"
root "/srv/overrides"

themes active="dark" {
    theme "default"
    theme "dark"
}

modules {
    module "Admin" "/srv/modules/admin"
    Shop "/srv/modules/shop"
}

default-dir "/srv/resources"
"#;
        let config = parse_config(content).unwrap();

        assert_eq!(config.root_dir, Some(PathBuf::from("/srv/overrides")));
        assert_eq!(config.active_theme(), Some("dark"));
        assert_eq!(config.themes, vec!["default".to_string(), "dark".to_string()]);
        assert_eq!(
            config.modules.get("Admin"),
            Some(&PathBuf::from("/srv/modules/admin"))
        );
        assert_eq!(
            config.modules.get("Shop"),
            Some(&PathBuf::from("/srv/modules/shop"))
        );
        assert_eq!(config.default_dir, Some(PathBuf::from("/srv/resources")));
    }

    #[test]
    fn active_falls_back_to_first_theme() {
        let config = parse_config("themes { theme \"foo\"; theme \"bar\" }").unwrap();
        assert_eq!(config.active_theme(), Some("foo"));
    }

    #[test]
    fn inline_theme_entries() {
        let config = parse_config("themes \"foo\" \"bar\"").unwrap();
        assert_eq!(config.themes, vec!["foo".to_string(), "bar".to_string()]);
    }

    #[test]
    fn module_without_directory_is_an_error() {
        assert!(parse_config("modules { module \"Admin\" }").is_err());
    }

    #[test]
    fn syntax_error_gets_a_hint() {
        let err = parse_config("themes {").unwrap_err();
        assert!(err.to_string().contains("KDL parsing error"));
    }

    #[test]
    fn empty_config_is_valid() {
        let config = parse_config("").unwrap();
        assert!(config.themes.is_empty());
        assert!(config.modules.is_empty());
        assert_eq!(config.active_theme(), None);
    }
}
