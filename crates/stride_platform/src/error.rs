//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The colour-scheme query is not available on this platform
    #[error("Colour-scheme query not available: {0}")]
    Unavailable(String),

    /// Registering or removing a change listener failed
    #[error("Scheme listener error: {0}")]
    Listener(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
