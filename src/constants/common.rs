// Common constants used throughout the codebase

/// Project name
pub const PROJECT_NAME: &str = "themeloc";

/// Project organization (reverse domain notation)
pub const PROJECT_QUALIFIER: &str = "com";
pub const PROJECT_ORG: &str = "themeloc";

/// Configuration file extension
pub const CONFIG_EXTENSION: &str = "kdl";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "themeloc.kdl";

/// Marker that introduces a module-qualified resource reference
pub const MODULE_MARKER: char = '@';

/// Directory holding themed resource variants
pub const THEMES_DIR_NAME: &str = "themes";

/// Resource tree directory inside a module
pub const RESOURCES_DIR_NAME: &str = "Resources";

/// View tree directory inside a module resource tree
pub const VIEWS_DIR_NAME: &str = "views";
