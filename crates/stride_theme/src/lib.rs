//! Stride Branding Engine
//!
//! Re-skins the UI per authenticated partner organisation ("white-labeling").
//!
//! # Overview
//!
//! A partner's visual identity arrives embedded in the signed-in user. The
//! engine:
//!
//! - **Normalizes** every colour (hex or `"r,g,b"`) with safe fallbacks
//! - **Derives** RGB triples and hover/active shades once per identity
//! - **Resolves** light or dark variants against the system preference
//! - **Projects** the result onto a style surface as a fixed set of
//!   `--brand-*` / `--ion-color-*` variables
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use stride_platform::{DarkModeSignal, ManualSchemeSource};
//! use stride_theme::{
//!     BrandingConfig, BrandingOrchestrator, CssVar, MemorySurface, SessionStore, StyleSurface,
//!     UserInfo,
//! };
//!
//! let surface = MemorySurface::new();
//! let signal = DarkModeSignal::new(Arc::new(ManualSchemeSource::new(false)));
//! let branding = BrandingOrchestrator::create(&BrandingConfig::default(), Box::new(surface.clone()), signal);
//!
//! let session = SessionStore::new();
//! branding.start(&session);
//! assert_eq!(surface.property(CssVar::BrandPrimary.name()).as_deref(), Some("#a44200"));
//!
//! let user: UserInfo = serde_json::from_str(
//!     r#"{"partner": {"id": 1, "name": "Muscle Hustle", "visual_identity": {"primary_color": "255,107,53"}}}"#,
//! ).unwrap();
//! session.login(user);
//! assert_eq!(surface.property(CssVar::BrandPrimary.name()).as_deref(), Some("#FF6B35"));
//! ```
//!
//! # Architecture
//!
//! State mutation always precedes resolution, which always precedes
//! projection. Dark-mode changes only flip the state's mode flag and
//! re-project; stored colours and cached shades are untouched.

pub mod audit;
pub mod auth;
pub mod config;
pub mod css;
pub mod defaults;
pub mod error;
pub mod identity;
pub mod orchestrator;
pub mod projector;
pub mod resolver;
pub mod state;
pub mod surface;
pub mod tokens;
pub mod view;

// Re-export commonly used types
pub use audit::{audit_contrast, ContrastWarning, WCAG_AA_NORMAL};
pub use auth::{AuthSource, SessionStore, UserListener};
pub use config::BrandingConfig;
pub use css::{CssVar, VarSource};
pub use defaults::BrandingDefaults;
pub use error::{BrandingError, Result, SurfaceError};
pub use identity::{IdentityPayload, Partner, UserInfo, VisualIdentity};
pub use orchestrator::{BrandingOrchestrator, BrandingPhase};
pub use projector::{DomProjector, ProjectionReport, SharedProjector, SharedState};
pub use resolver::{resolve, resolve_current, resolve_with_fallbacks, ResolvedColorSet};
pub use state::{
    BrandAssets, BrandMetadata, BrandingSnapshot, BrandingState, FactorShade, ModeDerivatives,
    ShadeDeriver,
};
pub use surface::{MemorySurface, StyleSurface};
pub use tokens::*;
pub use view::BrandingView;
