//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::theme::ThemeMode;

/// Name of the config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "noxchrono.toml";

/// Accepted values of `logging.level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal stopwatch configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TimerConfig {
    /// Time between frames delivered to the stopwatch
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: u64,
}

fn default_frame_interval() -> u64 {
    16 // ~60 frames per second
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: default_frame_interval(),
        }
    }
}

impl TimerConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

/// Display configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub theme: ThemeMode,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

// Quiet by default: the stopwatch readout shares the terminal
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("noxchrono").join("config.toml")),
            Some(PathBuf::from(LOCAL_CONFIG_FILE)),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first candidate that exists. A file that exists but fails to
    /// load is an error, not a reason to fall through to defaults.
    fn load_first(candidates: &[PathBuf]) -> Result<Self, ConfigError> {
        match candidates.iter().find(|path| path.exists()) {
            Some(path) => Self::load_with_env(path),
            None => Self::from_env(),
        }
    }

    /// Load an explicit file if given, otherwise search the default locations
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_with_env(path),
            None => Self::load_default(),
        }
    }

    /// Reject values the stopwatch cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timer.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "timer.frame_interval_ms must be greater than 0".to_string(),
            ));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(ConfigError::Invalid(format!(
                "logging.format must be 'pretty' or 'json', got '{}'",
                other
            ))),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        // Timer overrides
        if let Some(interval) = lookup("NOXCHRONO_FRAME_INTERVAL_MS") {
            self.timer.frame_interval_ms = interval.parse().map_err(|_| {
                ConfigError::Invalid(format!(
                    "NOXCHRONO_FRAME_INTERVAL_MS must be a number of milliseconds, got {:?}",
                    interval
                ))
            })?;
        }

        // Display overrides
        if let Some(theme) = lookup("NOXCHRONO_THEME") {
            self.display.theme = theme
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("NOXCHRONO_THEME: {}", e)))?;
        }

        // Logging overrides
        if let Some(level) = lookup("NOXCHRONO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("NOXCHRONO_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# NoxChrono Configuration
#
# Environment variables override these settings:
# - NOXCHRONO_FRAME_INTERVAL_MS
# - NOXCHRONO_THEME
# - NOXCHRONO_LOG_LEVEL
# - NOXCHRONO_LOG_FORMAT

[timer]
# Milliseconds between stopwatch frames in the terminal
frame_interval_ms = 16

[display]
# Color theme: dark or light
theme = "dark"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path (logs go to stderr otherwise)
# file = "/tmp/noxchrono.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.timer.frame_interval_ms, 16);
        assert_eq!(config.timer.frame_interval(), Duration::from_millis(16));
        assert_eq!(config.display.theme, ThemeMode::Dark);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.logging.file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_template_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.timer.frame_interval_ms, 16);
        assert_eq!(config.display.theme, ThemeMode::Dark);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\ntheme = \"light\"\n").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.display.theme, ThemeMode::Light);
        assert_eq!(config.timer.frame_interval_ms, 16);
    }

    #[test]
    fn test_load_rejects_zero_interval() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[timer]\nframe_interval_ms = 0\n").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_load_rejects_unknown_theme() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\ntheme = \"sepia\"\n").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(lookup_from(&[
                ("NOXCHRONO_FRAME_INTERVAL_MS", "33"),
                ("NOXCHRONO_THEME", "light"),
                ("NOXCHRONO_LOG_LEVEL", "debug"),
                ("NOXCHRONO_LOG_FORMAT", "json"),
            ]))
            .unwrap();

        assert_eq!(config.timer.frame_interval_ms, 33);
        assert_eq!(config.display.theme, ThemeMode::Light);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_overrides_are_reported() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(lookup_from(&[("NOXCHRONO_FRAME_INTERVAL_MS", "fast")]))
            .unwrap_err();
        assert!(err.to_string().contains("NOXCHRONO_FRAME_INTERVAL_MS"));
        assert_eq!(config.timer.frame_interval_ms, 16);

        let err = config
            .apply_overrides(lookup_from(&[("NOXCHRONO_THEME", "neon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert_eq!(config.display.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_load_rejects_unknown_log_level() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"loud\"\n").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let mut config = Config::default();
        for level in ["TRACE", "Info", "error"] {
            config.logging.level = level.to_string();
            assert!(config.validate().is_ok(), "{} should be accepted", level);
        }

        config
            .apply_overrides(lookup_from(&[("NOXCHRONO_LOG_LEVEL", "loud")]))
            .unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_broken_default_location_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("config.toml");
        std::fs::write(&broken, "[timer]\nframe_interval_ms = 0\n").unwrap();
        let fallback = dir.path().join(LOCAL_CONFIG_FILE);
        std::fs::write(&fallback, "[display]\ntheme = \"light\"\n").unwrap();

        let err = Config::load_first(&[broken, fallback]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_load_first_skips_missing_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join(LOCAL_CONFIG_FILE);
        std::fs::write(&present, "[display]\ntheme = \"light\"\n").unwrap();

        let config = Config::load_first(&[dir.path().join("absent.toml"), present]).unwrap();
        assert_eq!(config.display.theme, ThemeMode::Light);
    }
}
