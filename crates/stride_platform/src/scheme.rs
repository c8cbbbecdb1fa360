//! Light/dark colour scheme

use serde::{Deserialize, Serialize};
use std::fmt;

/// System or user colour preference
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Map a "prefers dark" flag onto a scheme
    pub const fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other scheme
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// `"light"` or `"dark"`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dark_and_toggle() {
        assert_eq!(ColorScheme::from_dark(true), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_dark(false), ColorScheme::Light);
        assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
        assert!(ColorScheme::Light.toggle().is_dark());
        assert_eq!(ColorScheme::Dark.to_string(), "dark");
        assert_eq!(ColorScheme::default(), ColorScheme::Light);
    }
}
