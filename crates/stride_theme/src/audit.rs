//! Contrast audit
//!
//! Checks the text/background pairs stylesheets rely on against the WCAG AA
//! minimum for normal text. Findings are advisory: partner colours are
//! applied regardless.

use crate::resolver::resolve;
use crate::state::BrandingSnapshot;
use crate::tokens::SemanticRole;
use serde::Serialize;
use stride_core::contrast_ratio;
use stride_platform::ColorScheme;

/// WCAG AA minimum contrast for normal-size text
pub const WCAG_AA_NORMAL: f64 = 4.5;

/// Foreground/background pairs that carry text
pub const TEXT_PAIRS: [(SemanticRole, SemanticRole); 3] = [
    (SemanticRole::TextPrimary, SemanticRole::Background),
    (SemanticRole::TextOnPrimary, SemanticRole::Primary),
    (SemanticRole::TextSecondary, SemanticRole::CardBackground),
];

/// A text pair below the required contrast
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContrastWarning {
    pub scheme: ColorScheme,
    pub foreground: SemanticRole,
    pub background: SemanticRole,
    pub ratio: f64,
    pub required: f64,
}

impl std::fmt::Display for ContrastWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} on {} ({}): {:.2}:1, needs {:.1}:1",
            self.foreground, self.background, self.scheme, self.ratio, self.required
        )
    }
}

/// Audit both modes of `snapshot`
pub fn audit_contrast(snapshot: &BrandingSnapshot) -> Vec<ContrastWarning> {
    let mut warnings = Vec::new();

    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        let colors = resolve(snapshot, scheme.is_dark());
        for (foreground, background) in TEXT_PAIRS {
            let ratio = contrast_ratio(colors.get(foreground), colors.get(background));
            if ratio < WCAG_AA_NORMAL {
                warnings.push(ContrastWarning {
                    scheme,
                    foreground,
                    background,
                    ratio,
                    required: WCAG_AA_NORMAL,
                });
            }
        }
    }

    warnings
}
