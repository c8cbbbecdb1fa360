//! Colour math for partner branding
//!
//! Partner records arrive with colours in two encodings: hex strings
//! (`"#a44200"`, `"a44200"`, `"#F63"`) and comma-separated RGB triples
//! (`"255,107,53"`). Everything here is pure and, apart from
//! [`rgb_triple_to_hex`], total: malformed input degrades to a documented
//! default instead of failing.

use crate::error::{ColorError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Default darkening/lightening factor for derived shades and tints
pub const DEFAULT_SHADE_FACTOR: f64 = 0.2;

/// Triple returned by [`hex_to_rgb_triple`] for unparseable input
const BLACK_TRIPLE: &str = "0, 0, 0";

fn rgb_pattern() -> &'static Regex {
    static RGB: OnceLock<Regex> = OnceLock::new();
    RGB.get_or_init(|| Regex::new(r"^\s*\d+\s*,\s*\d+\s*,\s*\d+\s*$").expect("valid rgb regex"))
}

fn hex_pattern() -> &'static Regex {
    static HEX: OnceLock<Regex> = OnceLock::new();
    HEX.get_or_init(|| {
        Regex::new(r"^#?(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("valid hex regex")
    })
}

/// An 8-bit sRGB colour
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 3- or 6-digit hex colour, with or without a leading `#`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.is_ascii() {
            return None;
        }

        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, ch) in channels.iter_mut().zip(digits.chars()) {
                    let nibble = ch.to_digit(16)? as u8;
                    *slot = nibble * 17;
                }
                Some(Self::new(channels[0], channels[1], channels[2]))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Uppercase `#RRGGBB`
    pub fn to_hex_upper(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Components as `"r, g, b"`, the form expected by `rgba(var(--x-rgb), a)` consumers
    pub fn to_triple(self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }

    /// Darken each channel by `factor` (0 = unchanged, 1 = black)
    pub fn shade(self, factor: f64) -> Self {
        let darken = |c: u8| clamp_channel((f64::from(c) * (1.0 - factor)).floor());
        Self::new(darken(self.r), darken(self.g), darken(self.b))
    }

    /// Lighten each channel toward 255 by `factor` (0 = unchanged, 1 = white)
    pub fn tint(self, factor: f64) -> Self {
        let lighten =
            |c: u8| clamp_channel((f64::from(c) + (255.0 - f64::from(c)) * factor).floor());
        Self::new(lighten(self.r), lighten(self.g), lighten(self.b))
    }

    /// WCAG relative luminance in `[0, 1]`
    pub fn relative_luminance(self) -> f64 {
        fn linear(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }
}

fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0) as u8
}

/// Convert a hex colour to an `"r, g, b"` triple
///
/// Accepts 3 or 6 hex digits with or without `#`. Anything else, including an
/// empty string or non-hex digits, yields `"0, 0, 0"`.
pub fn hex_to_rgb_triple(hex: &str) -> String {
    Rgb::from_hex(hex)
        .map(Rgb::to_triple)
        .unwrap_or_else(|| BLACK_TRIPLE.to_string())
}

/// Convert an `"r,g,b"` triple (spaces allowed) to uppercase `#RRGGBB`
///
/// This is the strict conversion: callers that need leniency use
/// [`normalize_color`].
pub fn rgb_triple_to_hex(rgb: &str) -> Result<String> {
    let invalid = |reason| ColorError::InvalidFormat {
        input: rgb.to_string(),
        reason,
    };

    if rgb.trim().is_empty() {
        return Err(invalid("empty input"));
    }

    let parts: Vec<&str> = rgb.split(',').collect();
    if parts.len() != 3 {
        return Err(invalid("expected exactly three comma-separated components"));
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(parts) {
        let value: i64 = part
            .trim()
            .parse()
            .map_err(|_| invalid("component is not an integer"))?;
        *slot = u8::try_from(value).map_err(|_| invalid("component out of range 0-255"))?;
    }

    Ok(Rgb::new(channels[0], channels[1], channels[2]).to_hex_upper())
}

/// Darker variant of `hex`; malformed input yields `"#000000"`
pub fn generate_shade(hex: &str, factor: f64) -> String {
    match Rgb::from_hex(hex) {
        Some(rgb) => rgb.shade(factor).to_hex(),
        None => Rgb::BLACK.to_hex(),
    }
}

/// Lighter variant of `hex`; malformed input yields `"#ffffff"`
pub fn generate_tint(hex: &str, factor: f64) -> String {
    match Rgb::from_hex(hex) {
        Some(rgb) => rgb.tint(factor).to_hex(),
        None => Rgb::WHITE.to_hex(),
    }
}

/// WCAG relative luminance of a hex colour; unparseable input reads as black
pub fn relative_luminance(hex: &str) -> f64 {
    Rgb::from_hex(hex).unwrap_or_default().relative_luminance()
}

/// WCAG contrast ratio between two hex colours, in `[1, 21]`
///
/// Unparseable input is measured as black.
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// True for 3 or 6 hex digits with an optional leading `#`
pub fn is_valid_hex(hex: &str) -> bool {
    hex_pattern().is_match(hex)
}

/// Ensure a `#` prefix; empty input becomes `"#000000"`
pub fn normalize_hex(hex: &str) -> String {
    if hex.is_empty() {
        return Rgb::BLACK.to_hex();
    }
    if hex.starts_with('#') {
        hex.to_string()
    } else {
        format!("#{hex}")
    }
}

/// True when `color` is shaped like `"255,107,53"` (whitespace allowed)
pub fn is_rgb_format(color: &str) -> bool {
    rgb_pattern().is_match(color.trim())
}

/// Detected encoding of a colour string
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    Rgb,
    Hex,
    Unknown,
}

/// Result of [`validate_color_format`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorValidation {
    pub format: ColorFormat,
    pub is_valid: bool,
}

impl ColorValidation {
    const UNKNOWN: Self = Self {
        format: ColorFormat::Unknown,
        is_valid: false,
    };
}

/// Classify a colour string and check that it converts
///
/// RGB-shaped strings are only valid when every component is within 0..=255.
pub fn validate_color_format(color: &str) -> ColorValidation {
    let trimmed = color.trim();
    if trimmed.is_empty() {
        return ColorValidation::UNKNOWN;
    }

    if is_rgb_format(trimmed) {
        let is_valid = trimmed
            .split(',')
            .all(|part| matches!(part.trim().parse::<u16>(), Ok(v) if v <= 255));
        return ColorValidation {
            format: ColorFormat::Rgb,
            is_valid,
        };
    }

    if is_valid_hex(trimmed) {
        return ColorValidation {
            format: ColorFormat::Hex,
            is_valid: true,
        };
    }

    ColorValidation::UNKNOWN
}

/// Normalize a colour in either encoding to hex, or return `fallback`
///
/// RGB triples become uppercase `#RRGGBB`; hex values keep their digits and
/// gain a `#` if missing. Absent, empty, malformed or out-of-range input
/// returns `fallback` unchanged.
pub fn normalize_color(value: Option<&str>, fallback: &str) -> String {
    let Some(raw) = value else {
        return fallback.to_string();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return fallback.to_string();
    }

    let validation = validate_color_format(trimmed);
    let normalized = match (validation.format, validation.is_valid) {
        (ColorFormat::Rgb, true) => rgb_triple_to_hex(trimmed).ok(),
        (ColorFormat::Hex, true) => Some(normalize_hex(trimmed)),
        _ => None,
    };

    normalized.unwrap_or_else(|| {
        tracing::debug!("colour {:?} not recognised, using fallback {}", raw, fallback);
        fallback.to_string()
    })
}
