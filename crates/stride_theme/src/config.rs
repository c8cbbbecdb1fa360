//! Branding configuration (branding.toml)
//!
//! ```toml
//! app_name = "Fitness App"
//! font_family = "Nunito"
//! shade_factor = 0.2
//! branded_class = "gym-branded"
//!
//! [light]
//! primary = "#a44200"
//!
//! [dark]
//! background = "18,18,18"
//!
//! [gray]
//! light = ["#f8f9fa", "#e9ecef", "#dee2e6", "#ced4da", "#adb5bd"]
//! ```

use crate::defaults::{
    BrandingDefaults, DEFAULT_APP_NAME, DEFAULT_BRANDED_CLASS, DEFAULT_FONT_FAMILY,
};
use crate::error::{BrandingError, Result};
use crate::tokens::{GrayScale, RoleMap, SemanticRole};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use stride_core::{normalize_color, DEFAULT_SHADE_FACTOR};

/// Top-level branding configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BrandingConfig {
    /// Name shown when no partner is active
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Darkening factor for primary/secondary shades, `0.0..=1.0`
    #[serde(default = "default_shade_factor")]
    pub shade_factor: f64,
    #[serde(default = "default_branded_class")]
    pub branded_class: String,
    /// Light palette overrides keyed by role id
    #[serde(default)]
    pub light: BTreeMap<String, String>,
    /// Dark palette overrides keyed by role id
    #[serde(default)]
    pub dark: BTreeMap<String, String>,
    #[serde(default)]
    pub gray: GrayConfig,
}

/// Gray scale overrides, five values each
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct GrayConfig {
    #[serde(default)]
    pub light: Option<Vec<String>>,
    #[serde(default)]
    pub dark: Option<Vec<String>>,
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

fn default_shade_factor() -> f64 {
    DEFAULT_SHADE_FACTOR
}

fn default_branded_class() -> String {
    DEFAULT_BRANDED_CLASS.to_string()
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            font_family: default_font_family(),
            shade_factor: default_shade_factor(),
            branded_class: default_branded_class(),
            light: BTreeMap::new(),
            dark: BTreeMap::new(),
            gray: GrayConfig::default(),
        }
    }
}

impl BrandingConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| BrandingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Built-in defaults with this configuration's overrides applied
    ///
    /// Unknown roles, unreadable colours, gray scales without exactly five
    /// entries and out-of-range shade factors are skipped with a warning.
    pub fn defaults(&self) -> BrandingDefaults {
        let builtin = BrandingDefaults::default();

        let shade_factor = if (0.0..=1.0).contains(&self.shade_factor) {
            self.shade_factor
        } else {
            tracing::warn!(
                "shade_factor {} outside 0..=1, using {}",
                self.shade_factor,
                builtin.shade_factor
            );
            builtin.shade_factor
        };

        BrandingDefaults {
            light: overlay(&builtin.light, &self.light, "light"),
            dark: overlay(&builtin.dark, &self.dark, "dark"),
            gray_light: overlay_gray(&builtin.gray_light, self.gray.light.as_deref(), "light"),
            gray_dark: overlay_gray(&builtin.gray_dark, self.gray.dark.as_deref(), "dark"),
            app_name: self.app_name.clone(),
            font_family: self.font_family.clone(),
            shade_factor,
            branded_class: self.branded_class.clone(),
        }
    }
}

fn overlay(
    base: &RoleMap<String>,
    overrides: &BTreeMap<String, String>,
    table: &str,
) -> RoleMap<String> {
    let mut palette = base.clone();
    for (key, value) in overrides {
        match SemanticRole::from_id(key) {
            Some(role) => palette[role] = normalize_color(Some(value.as_str()), &base[role]),
            None => tracing::warn!("unknown role {:?} in [{}] ignored", key, table),
        }
    }
    palette
}

fn overlay_gray(base: &GrayScale, overrides: Option<&[String]>, mode: &str) -> GrayScale {
    let Some(values) = overrides else {
        return base.clone();
    };
    if values.len() != base.steps.len() {
        tracing::warn!(
            "gray.{} needs {} entries, got {}; keeping defaults",
            mode,
            base.steps.len(),
            values.len()
        );
        return base.clone();
    }

    GrayScale {
        steps: std::array::from_fn(|i| {
            normalize_color(Some(values[i].as_str()), &base.steps[i])
        }),
    }
}
