use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use stride_core::generate_shade;
use stride_platform::{DarkModeSignal, ManualSchemeSource, SchemeSource};
use stride_theme::{
    BrandingConfig, BrandingDefaults, BrandingOrchestrator, BrandingPhase, BrandingState, CssVar,
    DomProjector, MemorySurface, Partner, SessionStore, ShadeDeriver, StyleSurface, UserInfo,
};

struct CountingShade {
    calls: Arc<AtomicUsize>,
}

impl ShadeDeriver for CountingShade {
    fn shade(&self, hex: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        generate_shade(hex, 0.2)
    }
}

struct Harness {
    branding: BrandingOrchestrator,
    surface: MemorySurface,
    scheme: Arc<ManualSchemeSource>,
    session: SessionStore,
}

fn harness(dark: bool) -> Harness {
    let surface = MemorySurface::new();
    let scheme = Arc::new(ManualSchemeSource::new(dark));
    let branding = BrandingOrchestrator::create(
        &BrandingConfig::default(),
        Box::new(surface.clone()),
        DarkModeSignal::new(scheme.clone()),
    );
    Harness {
        branding,
        surface,
        scheme,
        session: SessionStore::new(),
    }
}

fn partner_user(id: u64, primary: &str) -> UserInfo {
    let json = format!(
        r#"{{"id": 42, "partner": {{"id": {}, "name": "Gym {}", "visual_identity": {{"primary_color": "{}"}}}}}}"#,
        id, id, primary
    );
    serde_json::from_str(&json).unwrap()
}

fn primary(surface: &MemorySurface) -> Option<String> {
    surface.property(CssVar::BrandPrimary.name())
}

#[test]
fn start_evaluates_current_user_immediately() {
    let h = harness(false);
    h.session.login(partner_user(1, "255,107,53"));

    h.branding.start(&h.session);
    assert_eq!(
        h.branding.phase(),
        BrandingPhase::PartnerActive { partner_id: Some(1) }
    );
    assert_eq!(primary(&h.surface).as_deref(), Some("#FF6B35"));
    assert!(h.surface.has_class("gym-branded"));
}

#[test]
fn start_without_user_projects_defaults() {
    let h = harness(false);
    h.branding.start(&h.session);

    assert_eq!(h.branding.phase(), BrandingPhase::NoPartner);
    assert_eq!(primary(&h.surface).as_deref(), Some("#a44200"));
    assert_eq!(h.scheme.listener_count(), 1);
}

#[test]
fn repeated_partner_changes_keep_one_dark_listener() {
    let h = harness(false);
    h.branding.start(&h.session);

    let colours = ["#111111", "#222222", "#333333", "#444444", "#555555"];
    for (id, colour) in colours.iter().enumerate() {
        h.session.login(partner_user(id as u64 + 1, colour));
    }

    assert_eq!(h.scheme.listener_count(), 1);
    assert_eq!(primary(&h.surface).as_deref(), Some("#555555"));

    h.scheme.set_dark(true);
    assert_eq!(
        h.surface.property(CssVar::Background.name()).as_deref(),
        Some("#121212")
    );
    assert_eq!(primary(&h.surface).as_deref(), Some("#555555"));
}

#[test]
fn logout_restores_defaults_and_rearms() {
    let h = harness(true);
    h.branding.start(&h.session);
    h.session.login(partner_user(7, "#123456"));
    assert_eq!(primary(&h.surface).as_deref(), Some("#123456"));

    h.session.logout();
    let view = h.branding.view();
    assert_eq!(h.branding.phase(), BrandingPhase::NoPartner);
    assert_eq!(view.partner_name(), "Fitness App");
    assert!(!view.metadata.is_initialized);
    assert_eq!(primary(&h.surface).as_deref(), Some("#b84d0c"));
    assert_eq!(h.scheme.listener_count(), 1);

    h.scheme.set_dark(false);
    assert_eq!(primary(&h.surface).as_deref(), Some("#a44200"));
}

#[test]
fn identical_payloads_produce_identical_surface() {
    let h = harness(false);
    h.branding.start(&h.session);
    h.session.login(partner_user(1, "78,205,196"));
    let first = h.surface.properties();

    h.branding.handle_user(Some(&partner_user(1, "78,205,196")));
    assert_eq!(h.surface.properties(), first);
}

#[test]
fn partner_removed_from_user_resets() {
    let h = harness(false);
    h.branding.start(&h.session);
    h.session.login(partner_user(2, "#654321"));

    h.session.update_partner(None);
    assert_eq!(h.branding.phase(), BrandingPhase::NoPartner);
    assert_eq!(primary(&h.surface).as_deref(), Some("#a44200"));

    h.session.update_partner(Some(Partner {
        id: Some(3),
        ..Partner::default()
    }));
    assert_eq!(
        h.branding.phase(),
        BrandingPhase::PartnerActive { partner_id: Some(3) }
    );
    assert_eq!(primary(&h.surface).as_deref(), Some("#a44200"));
}

#[test]
fn dark_toggles_reuse_cached_shades() {
    let calls = Arc::new(AtomicUsize::new(0));
    let state = BrandingState::with_shader(
        BrandingDefaults::default(),
        Box::new(CountingShade {
            calls: calls.clone(),
        }),
    );
    let surface = MemorySurface::new();
    let scheme = Arc::new(ManualSchemeSource::new(false));
    let branding = BrandingOrchestrator::new(
        state,
        DomProjector::new(Box::new(surface.clone())),
        DarkModeSignal::new(scheme.clone()),
    );

    branding.handle_user(Some(&partner_user(1, "#336699")));
    let after_apply = calls.load(Ordering::SeqCst);

    for _ in 0..6 {
        scheme.toggle();
    }
    assert_eq!(calls.load(Ordering::SeqCst), after_apply);

    branding.handle_user(Some(&partner_user(1, "#336699")));
    assert_eq!(calls.load(Ordering::SeqCst), after_apply + 4);
    assert_eq!(
        surface.property(CssVar::BrandPrimaryShade.name()).as_deref(),
        Some("#28517a")
    );
}

#[test]
fn stop_detaches_from_session_and_platform() {
    let h = harness(false);
    h.branding.start(&h.session);
    assert_eq!(h.session.listener_count(), 1);

    h.branding.stop();
    assert_eq!(h.session.listener_count(), 0);
    assert_eq!(h.scheme.listener_count(), 0);
    assert!(h.surface.is_empty());

    h.session.login(partner_user(1, "#000000"));
    assert!(h.surface.is_empty());
}

#[test]
fn dropping_orchestrator_detaches_listeners() {
    let h = harness(false);
    h.branding.start(&h.session);
    let Harness {
        branding,
        scheme,
        session,
        ..
    } = h;

    drop(branding);
    assert_eq!(scheme.listener_count(), 0);
    assert_eq!(session.listener_count(), 0);
}

#[test]
fn concurrent_reactions_leave_a_consistent_outcome() {
    let partner = partner_user(3, "#111111");

    for _ in 0..200 {
        let h = harness(false);
        std::thread::scope(|scope| {
            scope.spawn(|| h.branding.handle_user(Some(&partner)));
            scope.spawn(|| h.branding.handle_user(None));
            scope.spawn(|| h.scheme.toggle());
        });

        let snapshot = h.branding.snapshot();
        let expected = "#111111";
        match h.branding.phase() {
            BrandingPhase::PartnerActive { partner_id } => {
                assert_eq!(partner_id, Some(3));
                assert!(snapshot.metadata.is_initialized);
                assert_eq!(primary(&h.surface).as_deref(), Some(expected));
            }
            BrandingPhase::NoPartner => {
                assert!(!snapshot.metadata.is_initialized);
                assert_ne!(primary(&h.surface).as_deref(), Some(expected));
            }
            BrandingPhase::Initial => panic!("a reaction did not complete"),
        }
        assert_eq!(h.scheme.listener_count(), 1);
    }
}
