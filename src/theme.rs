//! Theme Mode
//!
//! Dark/light flag. The browser dashboard expresses it as the presence of
//! the `light` class on the document root.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Class put on the document root in light mode
pub const LIGHT_CLASS: &str = "light";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Mode implied by whether the root element carries [`LIGHT_CLASS`]
    pub fn from_root_class(has_light_class: bool) -> Self {
        if has_light_class {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_light(self) -> bool {
        self == ThemeMode::Light
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected 'dark' or 'light')")]
pub struct ParseThemeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_from_root_class() {
        assert_eq!(ThemeMode::from_root_class(true), ThemeMode::Light);
        assert_eq!(ThemeMode::from_root_class(false), ThemeMode::Dark);
        assert!(ThemeMode::from_root_class(true).is_light());
    }

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" Light ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!(
            "sepia".parse::<ThemeMode>(),
            Err(ParseThemeError("sepia".to_string()))
        );
    }
}
