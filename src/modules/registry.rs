//! In-memory module registry.
//!
//! The locator only depends on the `ModuleRegistry` trait; this map-backed
//! implementation is what the CLI wires up from configuration, and what
//! tests use to stand in for a host module system.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::traits::ModuleRegistry;

#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    modules: HashMap<String, PathBuf>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, dir: impl Into<PathBuf>) {
        self.modules.insert(name.into(), dir.into());
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Iterate registered modules in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.modules
            .iter()
            .map(|(name, dir)| (name.as_str(), dir.as_path()))
    }
}

impl From<HashMap<String, PathBuf>> for StaticRegistry {
    fn from(modules: HashMap<String, PathBuf>) -> Self {
        Self { modules }
    }
}

impl ModuleRegistry for StaticRegistry {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.modules.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_hit_and_miss() {
        let mut registry = StaticRegistry::new();
        registry.insert("Admin", "/srv/modules/admin");

        assert_eq!(
            registry.resolve("Admin"),
            Some(PathBuf::from("/srv/modules/admin"))
        );
        assert_eq!(registry.resolve("Shop"), None);
    }

    #[test]
    fn from_map() {
        let mut map = HashMap::new();
        map.insert("Shop".to_string(), PathBuf::from("/srv/modules/shop"));

        let registry = StaticRegistry::from(map);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.resolve("Shop"),
            Some(PathBuf::from("/srv/modules/shop"))
        );
    }
}
