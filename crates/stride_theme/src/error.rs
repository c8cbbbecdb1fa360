//! Branding error types

use std::path::PathBuf;
use thiserror::Error;

/// A single style-surface operation was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("style surface rejected property {name}: {reason}")]
    Property { name: String, reason: String },

    #[error("style surface rejected class {name}: {reason}")]
    Class { name: String, reason: String },
}

/// Errors surfaced by the branding crate's fallible entry points
///
/// Nothing on the apply/resolve/project path returns these; they come from
/// loading configuration and decoding payloads.
#[derive(Error, Debug)]
pub enum BrandingError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid branding config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid branding payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for branding operations
pub type Result<T> = std::result::Result<T, BrandingError>;
