//! Canonical branding state
//!
//! [`BrandingState`] owns the record the rest of the engine reads. Only
//! [`apply_identity`](BrandingState::apply_identity) and
//! [`reset`](BrandingState::reset) write colours, assets and metadata;
//! [`set_dark_mode`](BrandingState::set_dark_mode) touches the mode flag
//! alone. Everything else sees owned [`BrandingSnapshot`] copies.

use crate::audit::audit_contrast;
use crate::defaults::BrandingDefaults;
use crate::identity::{Partner, VisualIdentity};
use crate::tokens::{GrayScale, RoleMap, SemanticRole};
use serde::Serialize;
use stride_core::{generate_shade, hex_to_rgb_triple, normalize_color};
use stride_platform::ColorScheme;

/// Produces the darker "shade" variant of a colour
///
/// Called exactly four times per identity application (primary and
/// secondary, light and dark) and never during projection.
pub trait ShadeDeriver: Send + Sync {
    fn shade(&self, hex: &str) -> String;
}

/// [`generate_shade`] with a fixed factor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FactorShade {
    pub factor: f64,
}

impl ShadeDeriver for FactorShade {
    fn shade(&self, hex: &str) -> String {
        generate_shade(hex, self.factor)
    }
}

/// Values derived from one mode's primary and secondary colours
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModeDerivatives {
    /// `"r, g, b"`
    pub primary_rgb: String,
    pub secondary_rgb: String,
    pub primary_shade: String,
    pub secondary_shade: String,
}

impl ModeDerivatives {
    fn derive(primary: &str, secondary: &str, shader: &dyn ShadeDeriver) -> Self {
        Self {
            primary_rgb: hex_to_rgb_triple(primary),
            secondary_rgb: hex_to_rgb_triple(secondary),
            primary_shade: shader.shade(primary),
            secondary_shade: shader.shade(secondary),
        }
    }
}

/// Asset URLs, kept raw (without `url(...)`)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BrandAssets {
    pub background_pattern: Option<String>,
    pub logo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BrandMetadata {
    pub partner_name: String,
    pub font_family: String,
    /// True once a partner identity has been applied
    pub is_initialized: bool,
}

/// Owned copy of the branding record
///
/// Dark-mode entries are optional so consumers can describe partial inputs;
/// a snapshot taken from [`BrandingState`] is always complete.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BrandingSnapshot {
    pub light: RoleMap<String>,
    pub dark: RoleMap<Option<String>>,
    pub light_derived: ModeDerivatives,
    pub dark_derived: Option<ModeDerivatives>,
    pub gray_light: GrayScale,
    pub gray_dark: Option<GrayScale>,
    pub is_dark_mode: bool,
    pub assets: BrandAssets,
    pub metadata: BrandMetadata,
}

impl BrandingSnapshot {
    pub fn light_color(&self, role: SemanticRole) -> &str {
        &self.light[role]
    }

    /// Dark colour for `role`, or the light one when the dark entry is missing
    pub fn dark_color(&self, role: SemanticRole) -> &str {
        self.dark[role]
            .as_deref()
            .unwrap_or_else(|| self.light_color(role))
    }

    pub fn color(&self, role: SemanticRole, scheme: ColorScheme) -> &str {
        match scheme {
            ColorScheme::Light => self.light_color(role),
            ColorScheme::Dark => self.dark_color(role),
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        ColorScheme::from_dark(self.is_dark_mode)
    }
}

/// Owner of the canonical branding record
pub struct BrandingState {
    defaults: BrandingDefaults,
    shader: Box<dyn ShadeDeriver>,
    record: BrandingSnapshot,
}

impl BrandingState {
    /// Start from `defaults`, shading with `defaults.shade_factor`
    pub fn new(defaults: BrandingDefaults) -> Self {
        let shader = FactorShade {
            factor: defaults.shade_factor,
        };
        Self::with_shader(defaults, Box::new(shader))
    }

    /// Start from `defaults` with a custom shade derivation
    pub fn with_shader(defaults: BrandingDefaults, shader: Box<dyn ShadeDeriver>) -> Self {
        let record = default_record(&defaults, shader.as_ref(), false);
        Self {
            defaults,
            shader,
            record,
        }
    }

    /// Apply a partner's visual identity
    ///
    /// Every colour is normalized against the built-in palette; dark colours
    /// prefer the explicit dark value, then the raw light value, then the
    /// built-in dark default. Assets, font and name keep their previous
    /// values when absent. `None` leaves the state untouched and returns
    /// false.
    pub fn apply_identity(&mut self, identity: Option<&VisualIdentity>) -> bool {
        let Some(identity) = identity else {
            tracing::warn!("no visual identity supplied, keeping current branding");
            return false;
        };

        let light = RoleMap::from_fn(|role| {
            normalize_color(
                identity.color(role, ColorScheme::Light),
                &self.defaults.light[role],
            )
        });
        let dark = RoleMap::from_fn(|role| {
            let raw = identity
                .color(role, ColorScheme::Dark)
                .or_else(|| identity.color(role, ColorScheme::Light));
            Some(normalize_color(raw, &self.defaults.dark[role]))
        });

        let shader = self.shader.as_ref();
        let light_derived = ModeDerivatives::derive(
            &light[SemanticRole::Primary],
            &light[SemanticRole::Secondary],
            shader,
        );
        let dark_derived = ModeDerivatives::derive(
            dark[SemanticRole::Primary].as_deref().unwrap_or_default(),
            dark[SemanticRole::Secondary].as_deref().unwrap_or_default(),
            shader,
        );

        let previous = &self.record;
        let record = BrandingSnapshot {
            light,
            dark,
            light_derived,
            dark_derived: Some(dark_derived),
            gray_light: self.defaults.gray_light.clone(),
            gray_dark: Some(self.defaults.gray_dark.clone()),
            is_dark_mode: previous.is_dark_mode,
            assets: BrandAssets {
                background_pattern: identity
                    .background_pattern
                    .clone()
                    .or_else(|| previous.assets.background_pattern.clone()),
                logo: identity
                    .logo
                    .clone()
                    .or_else(|| previous.assets.logo.clone()),
            },
            metadata: BrandMetadata {
                partner_name: previous.metadata.partner_name.clone(),
                font_family: identity
                    .font_family
                    .clone()
                    .unwrap_or_else(|| previous.metadata.font_family.clone()),
                is_initialized: true,
            },
        };

        if tracing::enabled!(tracing::Level::DEBUG) {
            for warning in audit_contrast(&record) {
                tracing::debug!("low contrast in applied identity: {}", warning);
            }
        }

        tracing::debug!(
            "BrandingState::apply_identity - primary {} / dark {}",
            record.light[SemanticRole::Primary],
            record.dark_color(SemanticRole::Primary)
        );

        self.record = record;
        true
    }

    /// Apply a partner's identity and adopt its name
    ///
    /// A partner without a visual identity changes nothing.
    pub fn apply_partner(&mut self, partner: &Partner) -> bool {
        if !self.apply_identity(partner.visual_identity.as_ref()) {
            return false;
        }
        if let Some(name) = &partner.name {
            self.record.metadata.partner_name = name.clone();
        }
        true
    }

    /// Restore the built-in identity and clear `is_initialized`
    ///
    /// The mode flag is a platform fact, not branding, and survives.
    pub fn reset(&mut self) {
        tracing::debug!("BrandingState::reset - restoring default branding");
        self.record = default_record(
            &self.defaults,
            self.shader.as_ref(),
            self.record.is_dark_mode,
        );
    }

    pub fn set_dark_mode(&mut self, is_dark: bool) {
        self.record.is_dark_mode = is_dark;
    }

    pub fn is_dark_mode(&self) -> bool {
        self.record.is_dark_mode
    }

    pub fn is_initialized(&self) -> bool {
        self.record.metadata.is_initialized
    }

    /// Owned copy of the current record
    pub fn snapshot(&self) -> BrandingSnapshot {
        self.record.clone()
    }

    pub fn defaults(&self) -> &BrandingDefaults {
        &self.defaults
    }
}

impl Default for BrandingState {
    fn default() -> Self {
        Self::new(BrandingDefaults::default())
    }
}

impl std::fmt::Debug for BrandingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrandingState")
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

fn default_record(
    defaults: &BrandingDefaults,
    shader: &dyn ShadeDeriver,
    is_dark_mode: bool,
) -> BrandingSnapshot {
    let light = defaults.light.clone();
    let dark = defaults.dark.map(|_, hex| Some(hex.clone()));
    let light_derived = ModeDerivatives::derive(
        &light[SemanticRole::Primary],
        &light[SemanticRole::Secondary],
        shader,
    );
    let dark_derived = ModeDerivatives::derive(
        &defaults.dark[SemanticRole::Primary],
        &defaults.dark[SemanticRole::Secondary],
        shader,
    );

    BrandingSnapshot {
        light,
        dark,
        light_derived,
        dark_derived: Some(dark_derived),
        gray_light: defaults.gray_light.clone(),
        gray_dark: Some(defaults.gray_dark.clone()),
        is_dark_mode,
        assets: BrandAssets::default(),
        metadata: BrandMetadata {
            partner_name: defaults.app_name.clone(),
            font_family: defaults.font_family.clone(),
            is_initialized: false,
        },
    }
}
