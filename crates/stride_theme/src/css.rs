//! Style-variable contract
//!
//! The closed set of variables the projector may write. Stylesheets reference
//! these names directly, so a role always maps to the same variable.

use crate::tokens::{GrayStep, SemanticRole};

/// Where a variable's value comes from
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum VarSource {
    Role(SemanticRole),
    PrimaryRgb,
    SecondaryRgb,
    PrimaryShade,
    SecondaryShade,
    Gray(GrayStep),
    BackgroundPattern,
    Logo,
    FontFamily,
}

/// A branding style variable
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum CssVar {
    // Brand
    BrandPrimary,
    BrandSecondary,
    BrandPrimaryRgb,
    BrandSecondaryRgb,
    BrandPrimaryShade,
    BrandSecondaryShade,

    // Ionic mirrors
    IonPrimary,
    IonSecondary,
    IonPrimaryRgb,
    IonSecondaryRgb,
    IonPrimaryShade,
    IonSecondaryShade,

    // Remaining roles
    Background,
    CardBackground,
    InputBackground,
    TextPrimary,
    TextSecondary,
    TextOnPrimary,
    Success,
    Warning,
    Danger,
    Accent,
    Border,

    // Gray scale
    Gray10,
    Gray20,
    Gray30,
    Gray40,
    Gray50,

    // Assets and typography
    BackgroundPattern,
    LogoUrl,
    FontFamily,
}

impl CssVar {
    /// Every variable, in write order
    pub const ALL: [CssVar; 31] = [
        CssVar::BrandPrimary,
        CssVar::BrandSecondary,
        CssVar::BrandPrimaryRgb,
        CssVar::BrandSecondaryRgb,
        CssVar::BrandPrimaryShade,
        CssVar::BrandSecondaryShade,
        CssVar::IonPrimary,
        CssVar::IonSecondary,
        CssVar::IonPrimaryRgb,
        CssVar::IonSecondaryRgb,
        CssVar::IonPrimaryShade,
        CssVar::IonSecondaryShade,
        CssVar::Background,
        CssVar::CardBackground,
        CssVar::InputBackground,
        CssVar::TextPrimary,
        CssVar::TextSecondary,
        CssVar::TextOnPrimary,
        CssVar::Success,
        CssVar::Warning,
        CssVar::Danger,
        CssVar::Accent,
        CssVar::Border,
        CssVar::Gray10,
        CssVar::Gray20,
        CssVar::Gray30,
        CssVar::Gray40,
        CssVar::Gray50,
        CssVar::BackgroundPattern,
        CssVar::LogoUrl,
        CssVar::FontFamily,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            CssVar::BrandPrimary => "--brand-primary",
            CssVar::BrandSecondary => "--brand-secondary",
            CssVar::BrandPrimaryRgb => "--brand-primary-rgb",
            CssVar::BrandSecondaryRgb => "--brand-secondary-rgb",
            CssVar::BrandPrimaryShade => "--brand-primary-shade",
            CssVar::BrandSecondaryShade => "--brand-secondary-shade",
            CssVar::IonPrimary => "--ion-color-primary",
            CssVar::IonSecondary => "--ion-color-secondary",
            CssVar::IonPrimaryRgb => "--ion-color-primary-rgb",
            CssVar::IonSecondaryRgb => "--ion-color-secondary-rgb",
            CssVar::IonPrimaryShade => "--ion-color-primary-shade",
            CssVar::IonSecondaryShade => "--ion-color-secondary-shade",
            CssVar::Background => "--brand-background-color",
            CssVar::CardBackground => "--brand-card-background-color",
            CssVar::InputBackground => "--brand-input-background-color",
            CssVar::TextPrimary => "--brand-text-primary-color",
            CssVar::TextSecondary => "--brand-text-secondary-color",
            CssVar::TextOnPrimary => "--brand-text-on-primary-color",
            CssVar::Success => "--brand-success-color",
            CssVar::Warning => "--brand-warning-color",
            CssVar::Danger => "--brand-danger-color",
            CssVar::Accent => "--brand-accent-color",
            CssVar::Border => "--brand-border-color",
            CssVar::Gray10 => "--brand-gray-10",
            CssVar::Gray20 => "--brand-gray-20",
            CssVar::Gray30 => "--brand-gray-30",
            CssVar::Gray40 => "--brand-gray-40",
            CssVar::Gray50 => "--brand-gray-50",
            CssVar::BackgroundPattern => "--brand-background-pattern",
            CssVar::LogoUrl => "--brand-logo-url",
            CssVar::FontFamily => "--brand-font-family",
        }
    }

    /// Look a variable up by its name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|var| var.name() == name)
    }

    pub const fn source(self) -> VarSource {
        match self {
            CssVar::BrandPrimary | CssVar::IonPrimary => VarSource::Role(SemanticRole::Primary),
            CssVar::BrandSecondary | CssVar::IonSecondary => {
                VarSource::Role(SemanticRole::Secondary)
            }
            CssVar::BrandPrimaryRgb | CssVar::IonPrimaryRgb => VarSource::PrimaryRgb,
            CssVar::BrandSecondaryRgb | CssVar::IonSecondaryRgb => VarSource::SecondaryRgb,
            CssVar::BrandPrimaryShade | CssVar::IonPrimaryShade => VarSource::PrimaryShade,
            CssVar::BrandSecondaryShade | CssVar::IonSecondaryShade => VarSource::SecondaryShade,
            CssVar::Background => VarSource::Role(SemanticRole::Background),
            CssVar::CardBackground => VarSource::Role(SemanticRole::CardBackground),
            CssVar::InputBackground => VarSource::Role(SemanticRole::InputBackground),
            CssVar::TextPrimary => VarSource::Role(SemanticRole::TextPrimary),
            CssVar::TextSecondary => VarSource::Role(SemanticRole::TextSecondary),
            CssVar::TextOnPrimary => VarSource::Role(SemanticRole::TextOnPrimary),
            CssVar::Success => VarSource::Role(SemanticRole::Success),
            CssVar::Warning => VarSource::Role(SemanticRole::Warning),
            CssVar::Danger => VarSource::Role(SemanticRole::Danger),
            CssVar::Accent => VarSource::Role(SemanticRole::Accent),
            CssVar::Border => VarSource::Role(SemanticRole::Border),
            CssVar::Gray10 => VarSource::Gray(GrayStep::Gray10),
            CssVar::Gray20 => VarSource::Gray(GrayStep::Gray20),
            CssVar::Gray30 => VarSource::Gray(GrayStep::Gray30),
            CssVar::Gray40 => VarSource::Gray(GrayStep::Gray40),
            CssVar::Gray50 => VarSource::Gray(GrayStep::Gray50),
            CssVar::BackgroundPattern => VarSource::BackgroundPattern,
            CssVar::LogoUrl => VarSource::Logo,
            CssVar::FontFamily => VarSource::FontFamily,
        }
    }

    /// The `--brand-*` variable carrying a role's colour
    pub const fn for_role(role: SemanticRole) -> Self {
        match role {
            SemanticRole::Primary => CssVar::BrandPrimary,
            SemanticRole::Secondary => CssVar::BrandSecondary,
            SemanticRole::Background => CssVar::Background,
            SemanticRole::CardBackground => CssVar::CardBackground,
            SemanticRole::InputBackground => CssVar::InputBackground,
            SemanticRole::TextPrimary => CssVar::TextPrimary,
            SemanticRole::TextSecondary => CssVar::TextSecondary,
            SemanticRole::TextOnPrimary => CssVar::TextOnPrimary,
            SemanticRole::Success => CssVar::Success,
            SemanticRole::Warning => CssVar::Warning,
            SemanticRole::Danger => CssVar::Danger,
            SemanticRole::Accent => CssVar::Accent,
            SemanticRole::Border => CssVar::Border,
        }
    }
}

impl std::fmt::Display for CssVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_names_are_unique_and_round_trip() {
        let names: FxHashSet<&str> = CssVar::ALL.iter().map(|v| v.name()).collect();
        assert_eq!(names.len(), CssVar::ALL.len());
        for var in CssVar::ALL {
            assert_eq!(CssVar::from_name(var.name()), Some(var));
        }
        assert_eq!(CssVar::from_name("--brand-unknown"), None);
    }

    #[test]
    fn test_every_role_has_a_variable() {
        for role in SemanticRole::ALL {
            let var = CssVar::for_role(role);
            assert_eq!(var.source(), VarSource::Role(role));
            assert!(CssVar::ALL.contains(&var));
        }
    }
}
