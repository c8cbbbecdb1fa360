//! Core error types

use thiserror::Error;

/// Colour parsing errors
///
/// Only strict conversions surface these; the lenient entry points
/// (`normalize_color`, `hex_to_rgb_triple`, shade/tint) substitute a fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input does not have the expected shape
    #[error("Invalid colour format {input:?}: {reason}")]
    InvalidFormat { input: String, reason: &'static str },
}

/// Result type for colour operations
pub type Result<T> = std::result::Result<T, ColorError>;
