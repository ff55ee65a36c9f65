//! Error types for FlyHigher Config

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while assembling or loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Parameter registry size mismatch: expected {expected}, got {actual}")]
    ParamCount { expected: usize, actual: usize },

    #[error("Duplicate parameter name: {0}")]
    DuplicateParam(String),

    #[error("Folder collision: {first} and {second} both resolve to {path}")]
    FolderCollision {
        first: &'static str,
        second: &'static str,
        path: PathBuf,
    },

    #[error("Path has no file name: {0}")]
    NoFileName(PathBuf),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
