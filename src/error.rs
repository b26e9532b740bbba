use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemelocError {
    /// Resource reference contains a parent-directory segment.
    /// Detected before any filesystem access.
    #[error("Resource '{0}' contains a parent directory segment (..)")]
    PathTraversal(String),

    /// No candidate across any applicable search tier exists on disk
    #[error("No file found for resource '{0}'")]
    ResourceNotFound(String),

    /// Module marker names a module the registry cannot resolve, and no
    /// other tier supplied an existing file either
    #[error("Unknown module: {0}")]
    UnknownModule(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Config file not found at: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error("KDL parse error: {0}")]
    KdlError(#[from] kdl::KdlError),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ThemelocError>;
