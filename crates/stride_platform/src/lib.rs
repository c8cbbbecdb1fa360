//! Stride Platform
//!
//! Wraps the platform's "prefers dark" colour-scheme query:
//!
//! - [`ColorScheme`]: light/dark enumeration
//! - [`SchemeSource`]: a platform query plus native change notification
//! - [`DarkModeSignal`]: subscribe-and-fire-immediately wrapper used by the
//!   branding engine
//!
//! A platform without a usable query still yields a deterministic answer
//! (light), so nothing downstream has to handle a missing preference.

pub mod detect;
pub mod error;
pub mod scheme;
pub mod signal;
pub mod source;

pub use detect::{detect_system_color_scheme, scheme_from_name};
pub use error::{PlatformError, Result};
pub use scheme::ColorScheme;
pub use signal::DarkModeSignal;
pub use source::{
    ManualSchemeSource, SchemeListener, SchemeSource, SystemSchemeSource, UnavailableSchemeSource,
};
pub use stride_core::Subscription;
