//! Core traits for dependency injection and testability
//!
//! The locator depends on the host module system only through this
//! abstraction. By depending on a trait rather than a concrete
//! implementation, we can:
//! - Mock the registry for unit tests
//! - Plug in whatever module or plugin system the host application uses
//! - Avoid global mutable state

use std::path::PathBuf;

/// Trait for resolving a symbolic module name to its base directory
///
/// A miss means "the module-tree tiers yield no candidates for this call",
/// not a fatal error; the locator only fails with `UnknownModule` once
/// every other search tier came up empty as well.
pub trait ModuleRegistry: Send + Sync {
    /// Resolve a module name to the directory holding its resources
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}
