//! Style surfaces
//!
//! A [`StyleSurface`] is the global style-variable store of the host (the
//! document root in a browser shell). Each write may be rejected on its own;
//! the projector carries on with the rest.

use crate::error::SurfaceError;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashSet;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex};
use stride_core::sync::lock;

/// Host style-variable store plus root class list
pub trait StyleSurface: Send {
    fn set_property(&mut self, name: &str, value: &str) -> Result<(), SurfaceError>;

    fn remove_property(&mut self, name: &str) -> Result<(), SurfaceError>;

    fn property(&self, name: &str) -> Option<String>;

    fn add_class(&mut self, class: &str) -> Result<(), SurfaceError>;

    fn remove_class(&mut self, class: &str) -> Result<(), SurfaceError>;

    fn has_class(&self, class: &str) -> bool;
}

#[derive(Default)]
struct SurfaceInner {
    properties: IndexMap<String, String>,
    classes: IndexSet<String>,
    rejected: FxHashSet<String>,
}

/// In-memory style surface
///
/// Cloning yields another handle to the same store, so a test or the CLI can
/// keep one handle while the projector owns another. Names passed to
/// [`reject`](Self::reject) fail every write, simulating a constrained host.
#[derive(Clone, Default)]
pub struct MemorySurface {
    inner: Arc<Mutex<SurfaceInner>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write to `name` (property or class) fail
    pub fn reject(&self, name: impl Into<String>) {
        lock(&self.inner).rejected.insert(name.into());
    }

    /// Current properties in insertion order
    pub fn properties(&self) -> IndexMap<String, String> {
        lock(&self.inner).properties.clone()
    }

    pub fn property_names(&self) -> Vec<String> {
        lock(&self.inner).properties.keys().cloned().collect()
    }

    pub fn classes(&self) -> Vec<String> {
        lock(&self.inner).classes.iter().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        let inner = lock(&self.inner);
        inner.properties.is_empty() && inner.classes.is_empty()
    }

    /// Render the properties as a CSS rule on `selector`
    pub fn to_css(&self, selector: &str) -> String {
        let inner = lock(&self.inner);
        let mut css = format!("{} {{\n", selector);
        for (name, value) in &inner.properties {
            let _ = writeln!(css, "  {}: {};", name, value);
        }
        css.push_str("}\n");
        css
    }

    fn check(inner: &SurfaceInner, name: &str, class: bool) -> Result<(), SurfaceError> {
        if !inner.rejected.contains(name) {
            return Ok(());
        }
        let reason = "write rejected by host".to_string();
        Err(if class {
            SurfaceError::Class {
                name: name.to_string(),
                reason,
            }
        } else {
            SurfaceError::Property {
                name: name.to_string(),
                reason,
            }
        })
    }
}

impl StyleSurface for MemorySurface {
    fn set_property(&mut self, name: &str, value: &str) -> Result<(), SurfaceError> {
        let mut inner = lock(&self.inner);
        Self::check(&inner, name, false)?;
        inner.properties.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_property(&mut self, name: &str) -> Result<(), SurfaceError> {
        let mut inner = lock(&self.inner);
        Self::check(&inner, name, false)?;
        inner.properties.shift_remove(name);
        Ok(())
    }

    fn property(&self, name: &str) -> Option<String> {
        lock(&self.inner).properties.get(name).cloned()
    }

    fn add_class(&mut self, class: &str) -> Result<(), SurfaceError> {
        let mut inner = lock(&self.inner);
        Self::check(&inner, class, true)?;
        inner.classes.insert(class.to_string());
        Ok(())
    }

    fn remove_class(&mut self, class: &str) -> Result<(), SurfaceError> {
        let mut inner = lock(&self.inner);
        Self::check(&inner, class, true)?;
        inner.classes.shift_remove(class);
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        lock(&self.inner).classes.contains(class)
    }
}

impl std::fmt::Debug for MemorySurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = lock(&self.inner);
        f.debug_struct("MemorySurface")
            .field("properties", &inner.properties.len())
            .field("classes", &inner.classes)
            .finish()
    }
}
