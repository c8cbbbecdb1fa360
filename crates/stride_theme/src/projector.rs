//! Style projection
//!
//! [`DomProjector`] is the only writer of the style surface. `apply` writes
//! every variable in [`CssVar::ALL`] that has a value and marks the root with
//! the branded class; `remove` deletes exactly that set and the class.
//! Individual write failures are logged and reported, never propagated.

use crate::css::{CssVar, VarSource};
use crate::defaults::DEFAULT_BRANDED_CLASS;
use crate::error::SurfaceError;
use crate::resolver::{resolve, ResolvedColorSet};
use crate::state::{BrandAssets, BrandMetadata, BrandingState};
use crate::surface::StyleSurface;
use std::sync::{Arc, Mutex};
use stride_core::sync::lock;
use stride_core::Subscription;
use stride_platform::DarkModeSignal;

/// Projector shared between the orchestrator and dark-mode callbacks
pub type SharedProjector = Arc<Mutex<DomProjector>>;

/// Branding state shared the same way
pub type SharedState = Arc<Mutex<BrandingState>>;

/// Outcome of one projection pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectionReport {
    /// Variables set to a value
    pub written: Vec<CssVar>,
    /// Variables removed (absent assets on apply, everything on remove)
    pub cleared: Vec<CssVar>,
    pub failed: Vec<SurfaceError>,
}

impl ProjectionReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Writes resolved branding onto a [`StyleSurface`]
pub struct DomProjector {
    surface: Box<dyn StyleSurface>,
    branded_class: String,
}

impl DomProjector {
    pub fn new(surface: Box<dyn StyleSurface>) -> Self {
        Self {
            surface,
            branded_class: DEFAULT_BRANDED_CLASS.to_string(),
        }
    }

    /// Use a different class to mark the root as branded
    pub fn with_branded_class(mut self, class: impl Into<String>) -> Self {
        self.branded_class = class.into();
        self
    }

    pub fn branded_class(&self) -> &str {
        &self.branded_class
    }

    /// Value `var` takes for this projection; `None` means "not present"
    pub fn value_for(
        var: CssVar,
        colors: &ResolvedColorSet,
        assets: &BrandAssets,
        metadata: &BrandMetadata,
    ) -> Option<String> {
        match var.source() {
            VarSource::Role(role) => Some(colors.get(role).to_string()),
            VarSource::PrimaryRgb => Some(colors.primary_rgb.clone()),
            VarSource::SecondaryRgb => Some(colors.secondary_rgb.clone()),
            VarSource::PrimaryShade => Some(colors.primary_shade.clone()),
            VarSource::SecondaryShade => Some(colors.secondary_shade.clone()),
            VarSource::Gray(step) => Some(colors.gray.get(step).to_string()),
            VarSource::BackgroundPattern => assets
                .background_pattern
                .as_ref()
                .map(|url| format!("url({})", url)),
            VarSource::Logo => assets.logo.as_ref().map(|url| format!("url({})", url)),
            VarSource::FontFamily => Some(metadata.font_family.clone()),
        }
    }

    /// Project `colors` plus assets and metadata
    ///
    /// Values are written as given; absent assets are removed so a previous
    /// partner's logo does not linger.
    pub fn apply(
        &mut self,
        colors: &ResolvedColorSet,
        assets: &BrandAssets,
        metadata: &BrandMetadata,
    ) -> ProjectionReport {
        let mut report = ProjectionReport::default();

        for var in CssVar::ALL {
            match Self::value_for(var, colors, assets, metadata) {
                Some(value) => match self.surface.set_property(var.name(), &value) {
                    Ok(()) => report.written.push(var),
                    Err(err) => {
                        tracing::warn!("failed to set {}: {}", var, err);
                        report.failed.push(err);
                    }
                },
                None => match self.surface.remove_property(var.name()) {
                    Ok(()) => report.cleared.push(var),
                    Err(err) => {
                        tracing::warn!("failed to clear {}: {}", var, err);
                        report.failed.push(err);
                    }
                },
            }
        }

        if let Err(err) = self.surface.add_class(&self.branded_class) {
            tracing::warn!("failed to mark root as branded: {}", err);
            report.failed.push(err);
        }

        tracing::trace!(
            "DomProjector::apply - {} scheme, {} written, {} failed",
            colors.scheme,
            report.written.len(),
            report.failed.len()
        );
        report
    }

    /// Delete every branding variable and the branded class
    pub fn remove(&mut self) -> ProjectionReport {
        let mut report = ProjectionReport::default();

        for var in CssVar::ALL {
            match self.surface.remove_property(var.name()) {
                Ok(()) => report.cleared.push(var),
                Err(err) => {
                    tracing::warn!("failed to remove {}: {}", var, err);
                    report.failed.push(err);
                }
            }
        }

        if let Err(err) = self.surface.remove_class(&self.branded_class) {
            tracing::warn!("failed to unmark branded root: {}", err);
            report.failed.push(err);
        }

        tracing::debug!("DomProjector::remove - branding retracted");
        report
    }

    /// Overwrite one branding variable by name
    ///
    /// Names outside the branding table are refused with a warning.
    pub fn update_property(&mut self, name: &str, value: &str) -> bool {
        let Some(var) = CssVar::from_name(name) else {
            tracing::warn!("refusing to set unknown branding variable {}", name);
            return false;
        };
        match self.surface.set_property(var.name(), value) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("failed to update {}: {}", var, err);
                false
            }
        }
    }

    pub fn property_value(&self, var: CssVar) -> Option<String> {
        self.surface.property(var.name())
    }

    /// True while the root carries the branded class
    pub fn is_applied(&self) -> bool {
        self.surface.has_class(&self.branded_class)
    }

    /// Re-resolve and re-project whenever the dark-mode signal fires
    ///
    /// The callback runs immediately with the current preference. Each run
    /// records the mode in `state`, takes a snapshot under the same lock,
    /// then resolves and projects it. Stored colours and shades are not
    /// touched.
    pub fn setup_reactive_dark_mode_sync(
        projector: &SharedProjector,
        signal: &DarkModeSignal,
        state: &SharedState,
    ) -> Subscription {
        let projector = projector.clone();
        let state = state.clone();

        signal.subscribe(move |is_dark| {
            // State stays locked until projected so a concurrent apply cannot
            // be overwritten by this older snapshot
            let mut state = lock(&state);
            state.set_dark_mode(is_dark);
            let snapshot = state.snapshot();
            let colors = resolve(&snapshot, is_dark);
            lock(&projector).apply(&colors, &snapshot.assets, &snapshot.metadata);
        })
    }
}

impl std::fmt::Debug for DomProjector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomProjector")
            .field("branded_class", &self.branded_class)
            .field("applied", &self.is_applied())
            .finish()
    }
}
