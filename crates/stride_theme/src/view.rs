//! Grouped read-only view for UI code

use crate::resolver::{resolve_current, ResolvedColorSet};
use crate::state::{BrandAssets, BrandMetadata, BrandingSnapshot};
use crate::tokens::SemanticRole;
use serde::Serialize;

/// Current branding grouped as `colors` / `assets` / `metadata`
///
/// `colors` holds the values for the mode in effect when the view was taken.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BrandingView {
    pub colors: ResolvedColorSet,
    pub assets: BrandAssets,
    pub metadata: BrandMetadata,
}

impl BrandingView {
    pub fn from_snapshot(snapshot: &BrandingSnapshot) -> Self {
        Self {
            colors: resolve_current(snapshot),
            assets: snapshot.assets.clone(),
            metadata: snapshot.metadata.clone(),
        }
    }

    pub fn color(&self, role: SemanticRole) -> &str {
        self.colors.get(role)
    }

    pub fn logo(&self) -> Option<&str> {
        self.assets.logo.as_deref()
    }

    pub fn partner_name(&self) -> &str {
        &self.metadata.partner_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BrandingState;

    #[test]
    fn test_view_json_groups() {
        let mut state = BrandingState::default();
        state.set_dark_mode(true);
        let view = BrandingView::from_snapshot(&state.snapshot());
        assert_eq!(view.color(SemanticRole::Background), "#121212");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["colors"]["scheme"], "dark");
        assert_eq!(json["colors"]["colors"]["background"], "#121212");
        assert_eq!(json["assets"]["logo"], serde_json::Value::Null);
        assert_eq!(json["metadata"]["partner_name"], "Fitness App");
        assert_eq!(json["metadata"]["is_initialized"], false);
    }
}
