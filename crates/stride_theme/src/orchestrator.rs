//! Branding orchestrator
//!
//! Drives state, resolution and projection from two event sources: the
//! signed-in user's partner and the platform dark-mode preference.
//!
//! ```text
//! Initial ──user──▶ NoPartner ◀──────▶ PartnerActive(id)
//!                       ▲                   │  ▲
//!                       └───────────────────┘  └── re-apply on every update
//! ```
//!
//! Every transition tears down the armed dark-mode listener before arming a
//! new one, so at most one is ever attached. Reactions are serialized: one
//! runs from teardown to re-arm before the next starts. Lock order is
//! reaction, then state, then projector.

use crate::auth::{AuthSource, UserListener};
use crate::config::BrandingConfig;
use crate::identity::UserInfo;
use crate::projector::{DomProjector, SharedProjector, SharedState};
use crate::resolver::{resolve_current, ResolvedColorSet};
use crate::state::{BrandingSnapshot, BrandingState};
use crate::surface::StyleSurface;
use crate::view::BrandingView;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use stride_core::sync::lock;
use stride_core::Subscription;
use stride_platform::DarkModeSignal;

/// Where the orchestrator is in its partner lifecycle
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum BrandingPhase {
    /// Not started, or stopped
    #[default]
    Initial,
    /// Default branding in effect
    NoPartner,
    /// A partner was observed; its identity is in effect if it had one
    PartnerActive { partner_id: Option<u64> },
}

struct OrchestratorInner {
    state: SharedState,
    projector: SharedProjector,
    signal: DarkModeSignal,
    reaction: Mutex<()>,
    dark_sync: Mutex<Option<Subscription>>,
    auth_sub: Mutex<Option<Subscription>>,
    phase: Mutex<BrandingPhase>,
    history: Mutex<Vec<(BrandingPhase, BrandingPhase)>>,
}

impl OrchestratorInner {
    fn handle_user(&self, user: Option<&UserInfo>) {
        let _reaction = lock(&self.reaction);

        // Teardown before arm
        let armed = lock(&self.dark_sync).take();
        if let Some(mut sync) = armed {
            sync.unsubscribe();
        }

        let next = match user.and_then(|user| user.partner.as_ref()) {
            Some(partner) => {
                if !lock(&self.state).apply_partner(partner) {
                    tracing::warn!(
                        "partner {:?} has no visual identity, keeping current branding",
                        partner.id
                    );
                }
                BrandingPhase::PartnerActive {
                    partner_id: partner.id,
                }
            }
            None => {
                lock(&self.state).reset();
                BrandingPhase::NoPartner
            }
        };
        self.transition(next);

        // Fires immediately: resolve + project the state just written
        let sync = DomProjector::setup_reactive_dark_mode_sync(
            &self.projector,
            &self.signal,
            &self.state,
        );
        *lock(&self.dark_sync) = Some(sync);
    }

    fn transition(&self, next: BrandingPhase) {
        let previous = std::mem::replace(&mut *lock(&self.phase), next.clone());
        tracing::debug!("branding phase {:?} -> {:?}", previous, next);
        lock(&self.history).push((previous, next));
    }
}

/// Top-level branding coordinator
///
/// Owns the state, projector and dark-mode listener for one UI root. Create
/// it once, [`start`](Self::start) it against the auth source, and
/// [`stop`](Self::stop) it on teardown. Dropping it detaches every listener
/// but leaves the surface as last projected.
pub struct BrandingOrchestrator {
    inner: Arc<OrchestratorInner>,
}

impl BrandingOrchestrator {
    pub fn new(state: BrandingState, projector: DomProjector, signal: DarkModeSignal) -> Self {
        Self {
            inner: Arc::new(OrchestratorInner {
                state: Arc::new(Mutex::new(state)),
                projector: Arc::new(Mutex::new(projector)),
                signal,
                reaction: Mutex::new(()),
                dark_sync: Mutex::new(None),
                auth_sub: Mutex::new(None),
                phase: Mutex::new(BrandingPhase::Initial),
                history: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Build state and projector from configuration
    pub fn create(
        config: &BrandingConfig,
        surface: Box<dyn StyleSurface>,
        signal: DarkModeSignal,
    ) -> Self {
        let defaults = config.defaults();
        let projector =
            DomProjector::new(surface).with_branded_class(defaults.branded_class.clone());
        Self::new(BrandingState::new(defaults), projector, signal)
    }

    /// Follow `auth`, evaluating its current user immediately
    ///
    /// Starting again replaces the previous auth subscription.
    pub fn start(&self, auth: &dyn AuthSource) {
        let previous = lock(&self.inner.auth_sub).take();
        if let Some(mut sub) = previous {
            sub.unsubscribe();
        }

        let weak = Arc::downgrade(&self.inner);
        let listener: UserListener =
            Arc::new(move |user: Option<&UserInfo>, _old: Option<&UserInfo>| {
                if let Some(inner) = weak.upgrade() {
                    inner.handle_user(user);
                }
            });
        let sub = auth.subscribe(listener);
        *lock(&self.inner.auth_sub) = Some(sub);
    }

    /// React to a user (or its absence) directly
    pub fn handle_user(&self, user: Option<&UserInfo>) {
        self.inner.handle_user(user);
    }

    /// Detach from auth and dark mode, then retract all branding
    ///
    /// Safe to call more than once.
    pub fn stop(&self) {
        let _reaction = lock(&self.inner.reaction);
        let auth_sub = lock(&self.inner.auth_sub).take();
        let dark_sync = lock(&self.inner.dark_sync).take();
        for mut sub in auth_sub.into_iter().chain(dark_sync) {
            sub.unsubscribe();
        }
        lock(&self.inner.projector).remove();

        if *lock(&self.inner.phase) != BrandingPhase::Initial {
            self.inner.transition(BrandingPhase::Initial);
        }
    }

    pub fn phase(&self) -> BrandingPhase {
        lock(&self.inner.phase).clone()
    }

    /// Every `(from, to)` phase change so far
    pub fn history(&self) -> Vec<(BrandingPhase, BrandingPhase)> {
        lock(&self.inner.history).clone()
    }

    pub fn snapshot(&self) -> BrandingSnapshot {
        lock(&self.inner.state).snapshot()
    }

    /// Colours for the mode currently in effect
    pub fn resolved(&self) -> ResolvedColorSet {
        resolve_current(&self.snapshot())
    }

    /// Grouped read-only view for UI code
    pub fn view(&self) -> BrandingView {
        BrandingView::from_snapshot(&self.snapshot())
    }

    /// True while a dark-mode listener is armed
    pub fn is_syncing(&self) -> bool {
        lock(&self.inner.dark_sync)
            .as_ref()
            .is_some_and(Subscription::is_active)
    }

    pub fn signal(&self) -> &DarkModeSignal {
        &self.inner.signal
    }

    pub fn projector(&self) -> &SharedProjector {
        &self.inner.projector
    }
}

impl std::fmt::Debug for BrandingOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrandingOrchestrator")
            .field("phase", &self.phase())
            .field("syncing", &self.is_syncing())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Partner;
    use crate::surface::MemorySurface;
    use stride_platform::{ManualSchemeSource, SchemeSource};

    fn orchestrator(dark: bool) -> (BrandingOrchestrator, MemorySurface, Arc<ManualSchemeSource>) {
        let surface = MemorySurface::new();
        let source = Arc::new(ManualSchemeSource::new(dark));
        let orchestrator = BrandingOrchestrator::create(
            &BrandingConfig::default(),
            Box::new(surface.clone()),
            DarkModeSignal::new(source.clone()),
        );
        (orchestrator, surface, source)
    }

    fn partner_user(id: u64, identity: &str) -> UserInfo {
        UserInfo::with_partner(Partner {
            id: Some(id),
            name: Some(format!("Partner {}", id)),
            slug: None,
            visual_identity: Some(serde_json::from_str(identity).unwrap()),
        })
    }

    #[test]
    fn test_no_user_projects_defaults() {
        let (branding, surface, _) = orchestrator(false);
        branding.handle_user(None);

        assert_eq!(branding.phase(), BrandingPhase::NoPartner);
        assert_eq!(surface.property("--brand-primary").as_deref(), Some("#a44200"));
        assert!(surface.has_class("gym-branded"));
        assert!(branding.is_syncing());
    }

    #[test]
    fn test_partner_transitions_are_recorded() {
        let (branding, _, _) = orchestrator(false);
        branding.handle_user(Some(&partner_user(1, "{}")));
        branding.handle_user(Some(&partner_user(2, "{}")));
        branding.handle_user(None);

        let active = |id| BrandingPhase::PartnerActive {
            partner_id: Some(id),
        };
        assert_eq!(
            branding.history(),
            vec![
                (BrandingPhase::Initial, active(1)),
                (active(1), active(2)),
                (active(2), BrandingPhase::NoPartner),
            ]
        );
    }

    #[test]
    fn test_partner_without_identity_keeps_branding() {
        let (branding, surface, _) = orchestrator(false);
        branding.handle_user(Some(&partner_user(1, r##"{"primary_color": "#123456"}"##)));

        let bare = UserInfo::with_partner(Partner {
            id: Some(2),
            ..Partner::default()
        });
        branding.handle_user(Some(&bare));
        assert_eq!(surface.property("--brand-primary").as_deref(), Some("#123456"));
        assert_eq!(
            branding.phase(),
            BrandingPhase::PartnerActive {
                partner_id: Some(2)
            }
        );
    }

    #[test]
    fn test_stop_retracts_and_detaches() {
        let (branding, surface, source) = orchestrator(true);
        branding.handle_user(Some(&partner_user(1, "{}")));
        assert_eq!(source.listener_count(), 1);

        branding.stop();
        branding.stop();
        assert_eq!(source.listener_count(), 0);
        assert!(surface.is_empty());
        assert_eq!(branding.phase(), BrandingPhase::Initial);
    }
}
