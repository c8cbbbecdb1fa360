//! Subcommand implementations

use crate::{Format, Mode};
use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use stride_core::{
    contrast_ratio, generate_shade, generate_tint, hex_to_rgb_triple, normalize_color,
    validate_color_format, ColorFormat,
};
use stride_platform::{DarkModeSignal, ManualSchemeSource, SystemSchemeSource};
use stride_theme::{
    audit_contrast, BrandingConfig, BrandingOrchestrator, BrandingState, IdentityPayload,
    MemorySurface, Partner, UserInfo, WCAG_AA_NORMAL,
};

fn load_config(path: Option<&Path>) -> Result<BrandingConfig> {
    match path {
        Some(path) => BrandingConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(BrandingConfig::default()),
    }
}

fn load_user(path: &Path) -> Result<UserInfo> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read identity {}", path.display()))?;
    let payload = IdentityPayload::parse(&json)
        .with_context(|| format!("Failed to parse identity {}", path.display()))?;
    Ok(payload.into_user())
}

fn signal_for(mode: Mode) -> DarkModeSignal {
    match mode {
        Mode::Light => DarkModeSignal::new(Arc::new(ManualSchemeSource::new(false))),
        Mode::Dark => DarkModeSignal::new(Arc::new(ManualSchemeSource::new(true))),
        Mode::System => DarkModeSignal::new(Arc::new(SystemSchemeSource::detect())),
    }
}

pub fn render(
    identity: Option<&Path>,
    mode: Mode,
    config: Option<&Path>,
    format: Format,
    out: &mut impl Write,
) -> Result<()> {
    let config = load_config(config)?;
    let user = identity.map(load_user).transpose()?;
    render_user(user.as_ref(), &config, mode, format, out)
}

fn render_user(
    user: Option<&UserInfo>,
    config: &BrandingConfig,
    mode: Mode,
    format: Format,
    out: &mut impl Write,
) -> Result<()> {
    let surface = MemorySurface::new();
    let branding =
        BrandingOrchestrator::create(config, Box::new(surface.clone()), signal_for(mode));
    branding.handle_user(user);
    tracing::info!("rendered branding in phase {:?}", branding.phase());

    match format {
        Format::Css => write!(out, "{}", surface.to_css(":root"))?,
        Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(&branding.view())?)?,
    }
    Ok(())
}

pub fn normalize(value: &str, fallback: &str, out: &mut impl Write) -> Result<()> {
    let validation = validate_color_format(value);
    let normalized = normalize_color(Some(value), fallback);

    let format = match validation.format {
        ColorFormat::Rgb => "rgb",
        ColorFormat::Hex => "hex",
        ColorFormat::Unknown => "unknown",
    };
    writeln!(out, "{}", normalized)?;
    if !validation.is_valid {
        eprintln!("input format: {} (invalid, fallback used)", format);
    } else {
        tracing::debug!("input format: {}", format);
    }
    Ok(())
}

pub fn contrast(first: &str, second: &str, out: &mut impl Write) -> Result<()> {
    let first = normalize_color(Some(first), "");
    let second = normalize_color(Some(second), "");
    if first.is_empty() || second.is_empty() {
        bail!("both arguments must be hex or r,g,b colours");
    }

    let ratio = contrast_ratio(&first, &second);
    let verdict = if ratio >= WCAG_AA_NORMAL {
        "passes"
    } else {
        "fails"
    };
    writeln!(
        out,
        "{:.2}:1 ({} WCAG AA {}:1 for normal text)",
        ratio, verdict, WCAG_AA_NORMAL
    )?;
    Ok(())
}

pub fn derive(hex: &str, factor: f64, out: &mut impl Write) -> Result<()> {
    if !(0.0..=1.0).contains(&factor) {
        bail!("factor must be between 0 and 1, got {}", factor);
    }
    let base = normalize_color(Some(hex), "");
    if base.is_empty() {
        bail!("{:?} is not a hex or r,g,b colour", hex);
    }

    writeln!(out, "base:  {}", base)?;
    writeln!(out, "rgb:   {}", hex_to_rgb_triple(&base))?;
    writeln!(out, "shade: {}", generate_shade(&base, factor))?;
    writeln!(out, "tint:  {}", generate_tint(&base, factor))?;
    Ok(())
}

pub fn audit(identity: &Path, config: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let config = load_config(config)?;
    let user = load_user(identity)?;
    let Some(partner) = user.partner else {
        bail!("{} carries no partner", identity.display());
    };
    audit_partner(&partner, &config, out)
        .with_context(|| format!("Failed to audit {}", identity.display()))
}

fn audit_partner(partner: &Partner, config: &BrandingConfig, out: &mut impl Write) -> Result<()> {
    let mut state = BrandingState::new(config.defaults());
    if !state.apply_partner(partner) {
        bail!("partner carries no visual identity");
    }

    let warnings = audit_contrast(&state.snapshot());
    if warnings.is_empty() {
        writeln!(out, "all text pairs meet WCAG AA ({}:1)", WCAG_AA_NORMAL)?;
    }
    for warning in &warnings {
        writeln!(out, "{}", warning)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(run: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn user(json: &str) -> UserInfo {
        IdentityPayload::parse(json).unwrap().into_user()
    }

    #[test]
    fn test_render_css_for_bare_identity() {
        let user = user(r#"{"primary_color": "255,107,53"}"#);
        let css = output(|out| {
            render_user(Some(&user), &BrandingConfig::default(), Mode::Light, Format::Css, out)
        });

        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --brand-primary: #FF6B35;\n"));
        assert!(css.contains("  --brand-primary-rgb: 255, 107, 53;\n"));
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn test_render_json_in_dark_mode() {
        let user = user(
            r##"{"partner": {"id": 9, "name": "Iron Gym", "visual_identity": {"primary_color_dark": "#336699"}}}"##,
        );
        let json = output(|out| {
            render_user(Some(&user), &BrandingConfig::default(), Mode::Dark, Format::Json, out)
        });

        let view: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(view["colors"]["scheme"], "dark");
        assert_eq!(view["colors"]["colors"]["primary"], "#336699");
        assert_eq!(view["metadata"]["partner_name"], "Iron Gym");
        assert_eq!(view["metadata"]["is_initialized"], true);
    }

    #[test]
    fn test_render_without_user_uses_defaults() {
        let css = output(|out| {
            render_user(None, &BrandingConfig::default(), Mode::Light, Format::Css, out)
        });
        assert!(css.contains("  --brand-primary: #a44200;\n"));
    }

    #[test]
    fn test_render_reads_login_response_from_file() {
        let path = std::env::temp_dir().join(format!("stride-login-{}.json", std::process::id()));
        fs::write(
            &path,
            r##"{"token": "t", "user": {"id": 1, "partner": {"visual_identity": {"primary_color": "#123456"}}}}"##,
        )
        .unwrap();

        let css = output(|out| render(Some(&path), Mode::Light, None, Format::Css, out));
        fs::remove_file(&path).unwrap();
        assert!(css.contains("  --brand-primary: #123456;\n"));
    }

    #[test]
    fn test_render_missing_identity_file_fails() {
        let path = Path::new("/nonexistent/stride/identity.json");
        let mut out = Vec::new();
        let err = render(Some(path), Mode::Light, None, Format::Css, &mut out).unwrap_err();
        assert!(err.to_string().contains("Failed to read identity"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_derive_prints_shade() {
        let text = output(|out| derive("255,107,53", 0.2, out));
        assert!(text.contains("base:  #FF6B35\n"));
        assert!(text.contains("rgb:   255, 107, 53\n"));
        assert!(text.contains("shade: #cc552a\n"));
    }

    #[test]
    fn test_derive_rejects_bad_factor_and_colour() {
        let mut out = Vec::new();
        assert!(derive("#a44200", 1.5, &mut out).is_err());
        assert!(derive("not a colour", 0.2, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_contrast_reports_ratio() {
        let text = output(|out| contrast("#000000", "#ffffff", out));
        assert!(text.starts_with("21.00:1 (passes"));

        let text = output(|out| contrast("#777777", "#888888", out));
        assert!(text.contains("fails"));
    }

    #[test]
    fn test_contrast_rejects_unreadable_input() {
        let mut out = Vec::new();
        let err = contrast("#zzzzzz", "#ffffff", &mut out).unwrap_err();
        assert!(err.to_string().contains("hex or r,g,b"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_normalize_prints_value_or_fallback() {
        assert_eq!(output(|out| normalize("12,34,56", "#000000", out)), "#0C2238\n");
        assert_eq!(output(|out| normalize("bogus", "#000000", out)), "#000000\n");
    }

    #[test]
    fn test_audit_partner_reports_low_contrast() {
        let partner = user(r##"{"partner": {"visual_identity": {"primary_color": "#ffff00"}}}"##)
            .partner
            .unwrap();
        let text = output(|out| audit_partner(&partner, &BrandingConfig::default(), out));
        assert!(!text.contains("all text pairs meet"));
        assert!(!text.is_empty());

        let bare = Partner::default();
        let mut out = Vec::new();
        assert!(audit_partner(&bare, &BrandingConfig::default(), &mut out).is_err());
    }
}
