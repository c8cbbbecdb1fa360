//! Mode resolution
//!
//! Pure functions selecting the light or dark variant of every role. A
//! snapshot with missing dark entries resolves to the light values.

use crate::state::{BrandingSnapshot, ModeDerivatives};
use crate::tokens::{GrayScale, RoleMap, SemanticRole};
use rustc_hash::FxHashMap;
use serde::Serialize;
use stride_platform::ColorScheme;

/// Concrete colours for one mode
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedColorSet {
    pub scheme: ColorScheme,
    pub colors: RoleMap<String>,
    pub primary_rgb: String,
    pub secondary_rgb: String,
    pub primary_shade: String,
    pub secondary_shade: String,
    pub gray: GrayScale,
}

impl ResolvedColorSet {
    pub fn get(&self, role: SemanticRole) -> &str {
        &self.colors[role]
    }
}

/// Resolve `snapshot` for the requested mode
pub fn resolve(snapshot: &BrandingSnapshot, is_dark: bool) -> ResolvedColorSet {
    resolve_with_fallbacks(snapshot, is_dark, &FxHashMap::default())
}

/// Resolve using the snapshot's own mode flag
pub fn resolve_current(snapshot: &BrandingSnapshot) -> ResolvedColorSet {
    resolve(snapshot, snapshot.is_dark_mode)
}

/// Resolve with explicit substitutes for missing dark entries
///
/// In dark mode each role takes the snapshot's dark value, then
/// `fallbacks[role]`, then the light value. Light mode ignores `fallbacks`.
pub fn resolve_with_fallbacks(
    snapshot: &BrandingSnapshot,
    is_dark: bool,
    fallbacks: &FxHashMap<SemanticRole, String>,
) -> ResolvedColorSet {
    let scheme = ColorScheme::from_dark(is_dark);

    let colors = RoleMap::from_fn(|role| match scheme {
        ColorScheme::Light => snapshot.light_color(role).to_string(),
        ColorScheme::Dark => snapshot.dark[role]
            .as_deref()
            .or_else(|| fallbacks.get(&role).map(String::as_str))
            .unwrap_or_else(|| snapshot.light_color(role))
            .to_string(),
    });

    let derived: &ModeDerivatives = match scheme {
        ColorScheme::Dark => snapshot
            .dark_derived
            .as_ref()
            .unwrap_or(&snapshot.light_derived),
        ColorScheme::Light => &snapshot.light_derived,
    };
    let gray = match scheme {
        ColorScheme::Dark => snapshot.gray_dark.as_ref().unwrap_or(&snapshot.gray_light),
        ColorScheme::Light => &snapshot.gray_light,
    };

    ResolvedColorSet {
        scheme,
        colors,
        primary_rgb: derived.primary_rgb.clone(),
        secondary_rgb: derived.secondary_rgb.clone(),
        primary_shade: derived.primary_shade.clone(),
        secondary_shade: derived.secondary_shade.clone(),
        gray: gray.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BrandingState;

    #[test]
    fn test_partial_snapshot_falls_back_to_light() {
        let mut snapshot = BrandingState::default().snapshot();
        snapshot.dark = RoleMap::default();
        snapshot.dark_derived = None;
        snapshot.gray_dark = None;

        let resolved = resolve(&snapshot, true);
        assert_eq!(resolved.scheme, ColorScheme::Dark);
        for role in SemanticRole::ALL {
            assert_eq!(resolved.get(role), snapshot.light_color(role));
        }
        assert_eq!(resolved.primary_shade, snapshot.light_derived.primary_shade);
        assert_eq!(resolved.gray, snapshot.gray_light);
    }

    #[test]
    fn test_fallbacks_only_fill_missing_dark_entries() {
        let mut snapshot = BrandingState::default().snapshot();
        snapshot.dark.set(SemanticRole::Accent, None);

        let mut fallbacks = FxHashMap::default();
        fallbacks.insert(SemanticRole::Accent, "#010203".to_string());
        fallbacks.insert(SemanticRole::Primary, "#040506".to_string());

        let dark = resolve_with_fallbacks(&snapshot, true, &fallbacks);
        assert_eq!(dark.get(SemanticRole::Accent), "#010203");
        assert_eq!(dark.get(SemanticRole::Primary), "#b84d0c");

        let light = resolve_with_fallbacks(&snapshot, false, &fallbacks);
        assert_eq!(light.get(SemanticRole::Accent), "#fff94f");
    }

    #[test]
    fn test_resolve_current_follows_flag() {
        let mut state = BrandingState::default();
        state.set_dark_mode(true);
        let resolved = resolve_current(&state.snapshot());
        assert_eq!(resolved.scheme, ColorScheme::Dark);
        assert_eq!(resolved.get(SemanticRole::Background), "#121212");
    }
}
