//! System colour-scheme detection

use crate::scheme::ColorScheme;

/// Environment variable that forces a scheme (`light` / `dark`)
pub const SCHEME_OVERRIDE_ENV: &str = "STRIDE_COLOR_SCHEME";

/// Detect the current system colour scheme
///
/// Checks, in order: the `STRIDE_COLOR_SCHEME` override, the desktop's own
/// hint (`GTK_THEME` on Linux, `AppleInterfaceStyle` on macOS). Falls back
/// to [`ColorScheme::Light`] when nothing answers.
pub fn detect_system_color_scheme() -> ColorScheme {
    if let Some(scheme) = std::env::var(SCHEME_OVERRIDE_ENV)
        .ok()
        .and_then(|value| scheme_from_name(&value))
    {
        return scheme;
    }

    native_scheme().unwrap_or_default()
}

/// Interpret a theme or scheme name by its `dark` / `light` keyword
///
/// `"Adwaita:dark"` and `"Dark"` map to dark, `"light"` to light; names
/// without either keyword give `None`.
pub fn scheme_from_name(name: &str) -> Option<ColorScheme> {
    let normalized = name.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return None;
    }
    if normalized.contains("dark") {
        return Some(ColorScheme::Dark);
    }
    if normalized.contains("light") {
        return Some(ColorScheme::Light);
    }
    None
}

#[cfg(target_os = "linux")]
fn native_scheme() -> Option<ColorScheme> {
    std::env::var("GTK_THEME")
        .ok()
        .and_then(|theme| scheme_from_name(&theme))
}

#[cfg(target_os = "macos")]
fn native_scheme() -> Option<ColorScheme> {
    // `defaults` exits non-zero when AppleInterfaceStyle is unset, i.e. light mode
    let output = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    if !output.status.success() {
        return Some(ColorScheme::Light);
    }
    scheme_from_name(&String::from_utf8_lossy(&output.stdout))
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn native_scheme() -> Option<ColorScheme> {
    None
}
