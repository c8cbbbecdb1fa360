//! Stride Core
//!
//! Foundational primitives for the Stride branding engine:
//!
//! - **Colour math**: hex/RGB conversion, format detection, shade and tint
//!   derivation, WCAG contrast ratios
//! - **Listener registries**: slot-keyed callback sets used by every
//!   subscription mechanism in the workspace
//!
//! # Example
//!
//! ```rust
//! use stride_core::color::{normalize_color, generate_shade};
//!
//! let primary = normalize_color(Some("255,107,53"), "#a44200");
//! assert_eq!(primary, "#FF6B35");
//! assert_eq!(generate_shade(&primary, 0.2), "#cc552a");
//! ```

pub mod color;
pub mod error;
pub mod listeners;
pub mod sync;

pub use color::{
    contrast_ratio, generate_shade, generate_tint, hex_to_rgb_triple, is_rgb_format,
    is_valid_hex, normalize_color, normalize_hex, relative_luminance, rgb_triple_to_hex,
    validate_color_format, ColorFormat, ColorValidation, Rgb, DEFAULT_SHADE_FACTOR,
};
pub use error::{ColorError, Result};
pub use listeners::{ListenerKey, ListenerSet, Subscription};
