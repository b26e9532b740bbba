pub mod common;

pub use common::{
    CONFIG_EXTENSION, CONFIG_FILE_NAME, MODULE_MARKER, PROJECT_NAME, PROJECT_ORG,
    PROJECT_QUALIFIER, RESOURCES_DIR_NAME, THEMES_DIR_NAME, VIEWS_DIR_NAME,
};
