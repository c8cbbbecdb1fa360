//! Colour-scheme sources
//!
//! A [`SchemeSource`] is the platform's "prefers dark" query together with its
//! native change notification. The branding engine never polls: listeners are
//! invoked only when the host reports a change.

use crate::detect::detect_system_color_scheme;
use crate::error::{PlatformError, Result};
use crate::scheme::ColorScheme;
use std::sync::{Arc, Mutex, RwLock};
use stride_core::sync::{lock, read, write};
use stride_core::{ListenerKey, ListenerSet};

/// Callback invoked with the new "prefers dark" value
pub type SchemeListener = Arc<dyn Fn(bool) + Send + Sync>;

/// Platform colour-scheme query plus change notification
pub trait SchemeSource: Send + Sync {
    /// Current preference; `Err` when the platform cannot answer
    fn prefers_dark(&self) -> Result<bool>;

    /// Register a change listener
    fn add_listener(&self, listener: SchemeListener) -> Result<ListenerKey>;

    /// Remove a change listener; false if the key was not registered
    fn remove_listener(&self, key: ListenerKey) -> bool;

    /// Number of registered change listeners
    fn listener_count(&self) -> usize;
}

/// Host-driven scheme source
///
/// Holds the preference in memory; the embedding shell (or a test) calls
/// [`set_dark`](Self::set_dark) when the OS reports a change.
pub struct ManualSchemeSource {
    dark: RwLock<bool>,
    listeners: Mutex<ListenerSet<SchemeListener>>,
}

impl ManualSchemeSource {
    pub fn new(dark: bool) -> Self {
        Self {
            dark: RwLock::new(dark),
            listeners: Mutex::new(ListenerSet::new()),
        }
    }

    /// Record a new preference and notify listeners if it changed
    pub fn set_dark(&self, dark: bool) {
        {
            let mut current = write(&self.dark);
            if *current == dark {
                return;
            }
            *current = dark;
        }

        tracing::debug!(
            "ManualSchemeSource::set_dark - switching to {}",
            ColorScheme::from_dark(dark)
        );

        // Listeners run without the registry lock so they may (un)subscribe
        let listeners = lock(&self.listeners).snapshot();
        for listener in listeners {
            listener(dark);
        }
    }

    /// Flip the preference
    pub fn toggle(&self) {
        let dark = *read(&self.dark);
        self.set_dark(!dark);
    }

    pub fn scheme(&self) -> ColorScheme {
        ColorScheme::from_dark(*read(&self.dark))
    }
}

impl Default for ManualSchemeSource {
    fn default() -> Self {
        Self::new(false)
    }
}

impl SchemeSource for ManualSchemeSource {
    fn prefers_dark(&self) -> Result<bool> {
        Ok(*read(&self.dark))
    }

    fn add_listener(&self, listener: SchemeListener) -> Result<ListenerKey> {
        Ok(lock(&self.listeners).insert(listener))
    }

    fn remove_listener(&self, key: ListenerKey) -> bool {
        lock(&self.listeners).remove(key).is_some()
    }

    fn listener_count(&self) -> usize {
        lock(&self.listeners).len()
    }
}

/// Scheme source seeded from the operating system
///
/// The preference is detected once at construction. Hosts forward the OS
/// appearance-change notification to [`notify`](Self::notify), or call
/// [`refresh`](Self::refresh) to re-run detection.
pub struct SystemSchemeSource {
    inner: ManualSchemeSource,
}

impl SystemSchemeSource {
    pub fn detect() -> Self {
        let scheme = detect_system_color_scheme();
        tracing::debug!("SystemSchemeSource::detect - system scheme is {}", scheme);
        Self {
            inner: ManualSchemeSource::new(scheme.is_dark()),
        }
    }

    /// Forward a native change notification
    pub fn notify(&self, scheme: ColorScheme) {
        self.inner.set_dark(scheme.is_dark());
    }

    /// Re-detect the system scheme and notify on change
    pub fn refresh(&self) {
        self.notify(detect_system_color_scheme());
    }
}

impl SchemeSource for SystemSchemeSource {
    fn prefers_dark(&self) -> Result<bool> {
        self.inner.prefers_dark()
    }

    fn add_listener(&self, listener: SchemeListener) -> Result<ListenerKey> {
        self.inner.add_listener(listener)
    }

    fn remove_listener(&self, key: ListenerKey) -> bool {
        self.inner.remove_listener(key)
    }

    fn listener_count(&self) -> usize {
        self.inner.listener_count()
    }
}

/// Source for environments with no colour-scheme API at all
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableSchemeSource;

impl SchemeSource for UnavailableSchemeSource {
    fn prefers_dark(&self) -> Result<bool> {
        Err(PlatformError::Unavailable(
            "no prefers-color-scheme query".to_string(),
        ))
    }

    fn add_listener(&self, _listener: SchemeListener) -> Result<ListenerKey> {
        Err(PlatformError::Listener(
            "no colour-scheme change notification".to_string(),
        ))
    }

    fn remove_listener(&self, _key: ListenerKey) -> bool {
        false
    }

    fn listener_count(&self) -> usize {
        0
    }
}
