//! Dark-mode signal
//!
//! [`DarkModeSignal::subscribe`] invokes the callback synchronously with the
//! current value, then again on every change reported by the source. Each
//! subscription is independent: detaching one leaves the others attached.

use crate::scheme::ColorScheme;
use crate::source::{SchemeListener, SchemeSource, SystemSchemeSource};
use std::sync::Arc;
use stride_core::Subscription;

/// Current "prefers dark" state plus change subscriptions
#[derive(Clone)]
pub struct DarkModeSignal {
    source: Arc<dyn SchemeSource>,
}

impl DarkModeSignal {
    pub fn new(source: Arc<dyn SchemeSource>) -> Self {
        Self { source }
    }

    /// Signal backed by the detected system scheme
    pub fn system() -> Self {
        Self::new(Arc::new(SystemSchemeSource::detect()))
    }

    /// Read the preference now; an unavailable platform reads as light
    pub fn current(&self) -> bool {
        match self.source.prefers_dark() {
            Ok(dark) => dark,
            Err(err) => {
                tracing::warn!("dark-mode query failed, assuming light: {}", err);
                false
            }
        }
    }

    /// [`current`](Self::current) as a [`ColorScheme`]
    pub fn scheme(&self) -> ColorScheme {
        ColorScheme::from_dark(self.current())
    }

    /// Invoke `callback(current())` now and on every subsequent change
    ///
    /// If the platform cannot deliver change notifications the callback still
    /// receives the initial value and the returned handle is inert.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let listener: SchemeListener = Arc::new(callback);

        // Registered before the initial call so a change in between is not lost
        let subscription = match self.source.add_listener(listener.clone()) {
            Ok(key) => {
                let source = Arc::downgrade(&self.source);
                Subscription::new(move || {
                    if let Some(source) = source.upgrade() {
                        source.remove_listener(key);
                    }
                })
            }
            Err(err) => {
                tracing::warn!("dark-mode change listener not installed: {}", err);
                Subscription::inert()
            }
        };

        listener(self.current());
        subscription
    }

    /// The underlying platform source
    pub fn source(&self) -> &Arc<dyn SchemeSource> {
        &self.source
    }

    /// Number of change listeners currently attached to the source
    pub fn listener_count(&self) -> usize {
        self.source.listener_count()
    }
}

impl std::fmt::Debug for DarkModeSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DarkModeSignal")
            .field("listeners", &self.source.listener_count())
            .finish()
    }
}
