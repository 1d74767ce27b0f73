//! Domain error types for mover
//!
//! The reconciler itself never fails: operations on missing items are no-ops.
//! Errors come from the host side:
//! - `SourceError` for loading item lists
//! - `MoverError` as the top-level error type

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for mover
#[derive(Debug, Error)]
pub enum MoverError {
    #[error("Item source error: {0}")]
    Source(#[from] SourceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Mouse capture could not be enabled, so drag gestures cannot be
    /// recognized. The widget refuses to start without it.
    #[error("Drag support unavailable: {0}")]
    DragUnavailable(String),
}

/// Errors related to reading item lists
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid TOML in {0}: {1}")]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("Invalid JSON in {0}: {1}")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("Unsupported item file format: {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
}

/// Result type alias for MoverError
pub type Result<T> = std::result::Result<T, MoverError>;

/// Result type alias for SourceError
pub type SourceResult<T> = std::result::Result<T, SourceError>;

