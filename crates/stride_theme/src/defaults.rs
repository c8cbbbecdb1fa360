//! Built-in branding
//!
//! The palette shown before any partner identity is applied and restored on
//! logout.

use crate::tokens::{GrayScale, RoleMap, SemanticRole};
use stride_core::DEFAULT_SHADE_FACTOR;

/// Name shown when no partner is active
pub const DEFAULT_APP_NAME: &str = "Fitness App";

pub const DEFAULT_FONT_FAMILY: &str = "Nunito";

/// Class marking the root as branded
pub const DEFAULT_BRANDED_CLASS: &str = "gym-branded";

pub const DEFAULT_GRAY_LIGHT: [&str; 5] = ["#f8f9fa", "#e9ecef", "#dee2e6", "#ced4da", "#adb5bd"];

pub const DEFAULT_GRAY_DARK: [&str; 5] = ["#1e1e1e", "#2a2a2a", "#3a3a3a", "#4a4a4a", "#6c6c6c"];

/// Built-in light-mode colour for a role
pub const fn light_default(role: SemanticRole) -> &'static str {
    match role {
        SemanticRole::Primary => "#a44200",
        SemanticRole::Secondary => "#d58936",
        SemanticRole::Background => "#ffffff",
        SemanticRole::CardBackground => "#f8f9fa",
        SemanticRole::InputBackground => "#ffffff",
        SemanticRole::TextPrimary => "#3c1518",
        SemanticRole::TextSecondary => "#69140e",
        SemanticRole::TextOnPrimary => "#ffffff",
        SemanticRole::Success => "#10dc60",
        SemanticRole::Warning => "#fff94f",
        SemanticRole::Danger => "#69140e",
        SemanticRole::Accent => "#fff94f",
        SemanticRole::Border => "#dee2e6",
    }
}

/// Built-in dark-mode colour for a role
pub const fn dark_default(role: SemanticRole) -> &'static str {
    match role {
        SemanticRole::Primary => "#b84d0c",
        SemanticRole::Secondary => "#e8a15a",
        SemanticRole::Background => "#121212",
        SemanticRole::CardBackground => "#1e1e1e",
        SemanticRole::InputBackground => "#2a2a2a",
        SemanticRole::TextPrimary => "#f5f5f5",
        SemanticRole::TextSecondary => "#c8c8c8",
        SemanticRole::TextOnPrimary => "#ffffff",
        SemanticRole::Success => "#2fdf75",
        SemanticRole::Warning => "#ffd534",
        SemanticRole::Danger => "#ff4961",
        SemanticRole::Accent => "#fff94f",
        SemanticRole::Border => "#3a3a3a",
    }
}

/// The complete default identity, possibly adjusted by configuration
#[derive(Clone, Debug, PartialEq)]
pub struct BrandingDefaults {
    pub light: RoleMap<String>,
    pub dark: RoleMap<String>,
    pub gray_light: GrayScale,
    pub gray_dark: GrayScale,
    pub app_name: String,
    pub font_family: String,
    /// Darkening factor for cached primary/secondary shades
    pub shade_factor: f64,
    pub branded_class: String,
}

impl Default for BrandingDefaults {
    fn default() -> Self {
        Self {
            light: RoleMap::from_fn(|role| light_default(role).to_string()),
            dark: RoleMap::from_fn(|role| dark_default(role).to_string()),
            gray_light: GrayScale::new(DEFAULT_GRAY_LIGHT),
            gray_dark: GrayScale::new(DEFAULT_GRAY_DARK),
            app_name: DEFAULT_APP_NAME.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            shade_factor: DEFAULT_SHADE_FACTOR,
            branded_class: DEFAULT_BRANDED_CLASS.to_string(),
        }
    }
}
