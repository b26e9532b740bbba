//! Theme-aware resource resolution.
//!
//! Given a symbolic reference such as `@Admin/Resources/views/index`, the
//! locator computes the ordered candidate paths across the override tiers
//! and checks them for existence, most specific first:
//!
//! 1. root override, themed:  `<root>/themes/<theme>/<Module>/<override>`
//! 2. root override, stock:   `<root>/<Module>/<override>`
//! 3. module tree, themed:    `<module_dir>/Resources/themes/<theme>/<template>`
//! 4. default dir, themed:    `<default_dir>/themes/<theme>/<template>`
//! 5. module tree, stock:     `<module_dir>/<rel>`
//! 6. default dir, stock:     `<default_dir>/<rel>`
//!
//! `<override>` is the reference with the `Resources/` prefix stripped and
//! `<template>` additionally drops a leading `views/` segment. Tiers 1-4
//! only apply to references into a module resource tree (`Resources/...`).
//! Bare references (no module marker) search the root override and the
//! default directory only.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::constants::{MODULE_MARKER, RESOURCES_DIR_NAME, THEMES_DIR_NAME, VIEWS_DIR_NAME};
use crate::core::theme::ActiveTheme;
use crate::error::{Result, ThemelocError};
use crate::traits::ModuleRegistry;

/// Outcome of a resolution call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located {
    /// First existing candidate in tier order
    First(PathBuf),
    /// Every existing candidate in tier order, duplicates removed
    All(Vec<PathBuf>),
}

impl Located {
    pub fn into_paths(self) -> Vec<PathBuf> {
        match self {
            Located::First(path) => vec![path],
            Located::All(paths) => paths,
        }
    }
}

/// A parsed resource reference.
enum Reference<'a> {
    /// `@Module/relative/path`
    Module { module: &'a str, rel: &'a str },
    /// Plain relative path without a module marker
    Bare(&'a str),
}

pub struct ResourceLocator {
    theme: Arc<ActiveTheme>,
    registry: Arc<dyn ModuleRegistry>,
    root_dir: Option<PathBuf>,
    last_theme: RwLock<String>,
}

impl ResourceLocator {
    /// Create a locator.
    ///
    /// `root_dir` is the global override directory searched before any
    /// module tree; `None` or an empty path disables the root tiers.
    pub fn new(
        theme: Arc<ActiveTheme>,
        registry: Arc<dyn ModuleRegistry>,
        root_dir: Option<PathBuf>,
    ) -> Self {
        let initial = theme.name();
        Self {
            theme,
            registry,
            root_dir: root_dir.filter(|p| !p.as_os_str().is_empty()),
            last_theme: RwLock::new(initial),
        }
    }

    /// Theme name snapshot captured by the most recent `locate` call, or
    /// at construction if no call happened yet.
    pub fn last_theme(&self) -> String {
        match self.last_theme.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Resolve a resource reference to concrete file paths.
    ///
    /// With `first_only` the first existing candidate in tier order is
    /// returned; otherwise every existing candidate, most specific first,
    /// duplicates removed. An empty result is always an error.
    pub fn locate(&self, resource: &str, default_dir: &Path, first_only: bool) -> Result<Located> {
        let theme = self.refresh_theme();

        reject_parent_segments(resource)?;

        let (candidates, unknown_module) = match parse_reference(resource) {
            Reference::Module { module, rel } => {
                let module_dir = self.registry.resolve(module);
                let unknown = module_dir.is_none().then(|| module.to_string());
                let candidates =
                    self.module_candidates(module, rel, module_dir.as_deref(), default_dir, &theme);
                (candidates, unknown)
            }
            Reference::Bare(rel) => (self.bare_candidates(rel, default_dir, &theme), None),
        };

        let mut found: Vec<PathBuf> = Vec::new();
        for candidate in candidates {
            if !candidate.exists() {
                continue;
            }
            if first_only {
                return Ok(Located::First(candidate));
            }
            if !found.contains(&candidate) {
                found.push(candidate);
            }
        }

        if found.is_empty() {
            // A registry miss is only fatal once no other tier supplied an
            // existing file.
            return Err(match unknown_module {
                Some(module) => ThemelocError::UnknownModule(module),
                None => ThemelocError::ResourceNotFound(resource.to_string()),
            });
        }

        Ok(Located::All(found))
    }

    /// Re-read the active theme name and store it in the snapshot field.
    fn refresh_theme(&self) -> String {
        let current = self.theme.name();
        match self.last_theme.write() {
            Ok(mut guard) => *guard = current.clone(),
            Err(poisoned) => *poisoned.into_inner() = current.clone(),
        }
        current
    }

    fn module_candidates(
        &self,
        module: &str,
        rel: &str,
        module_dir: Option<&Path>,
        default_dir: &Path,
        theme: &str,
    ) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(override_path) = resource_override_path(rel) {
            let template_path = template_path(override_path);

            if let Some(root) = &self.root_dir {
                candidates.push(
                    root.join(THEMES_DIR_NAME)
                        .join(theme)
                        .join(module)
                        .join(override_path),
                );
                candidates.push(root.join(module).join(override_path));
            }
            if let Some(dir) = module_dir {
                candidates.push(
                    dir.join(RESOURCES_DIR_NAME)
                        .join(THEMES_DIR_NAME)
                        .join(theme)
                        .join(template_path),
                );
            }
            candidates.push(
                default_dir
                    .join(THEMES_DIR_NAME)
                    .join(theme)
                    .join(template_path),
            );
        }

        if let Some(dir) = module_dir {
            candidates.push(dir.join(rel));
        }
        candidates.push(default_dir.join(rel));

        candidates
    }

    fn bare_candidates(&self, rel: &str, default_dir: &Path, theme: &str) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(root) = &self.root_dir {
            candidates.push(root.join(THEMES_DIR_NAME).join(theme).join(rel));
            candidates.push(root.join(rel));
        }
        candidates.push(default_dir.join(THEMES_DIR_NAME).join(theme).join(rel));
        candidates.push(default_dir.join(rel));

        candidates
    }
}

fn parse_reference(resource: &str) -> Reference<'_> {
    match resource.strip_prefix(MODULE_MARKER) {
        Some(rest) => {
            let (module, rel) = rest.split_once('/').unwrap_or((rest, ""));
            Reference::Module { module, rel }
        }
        None => Reference::Bare(resource),
    }
}

/// Reject any reference containing a parent-directory segment.
///
/// Splits on both separator characters so a traversal cannot hide behind
/// mixed separators in Windows-style input.
fn reject_parent_segments(resource: &str) -> Result<()> {
    if resource.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(ThemelocError::PathTraversal(resource.to_string()));
    }
    Ok(())
}

/// For references into a module resource tree (`Resources/...`), the part
/// after the `Resources/` prefix; `None` for anything else.
fn resource_override_path(rel: &str) -> Option<&str> {
    if rel == RESOURCES_DIR_NAME {
        return Some("");
    }
    rel.strip_prefix(RESOURCES_DIR_NAME)?.strip_prefix('/')
}

/// Themed module trees keep templates directly under `themes/<name>`, so
/// the `views/` segment drops out of the override path.
fn template_path(override_path: &str) -> &str {
    override_path
        .strip_prefix(VIEWS_DIR_NAME)
        .and_then(|p| p.strip_prefix('/'))
        .unwrap_or(override_path)
}
