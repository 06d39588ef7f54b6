#![forbid(unsafe_code)]

//! Configuration for the Academy diagram application.
//!
//! Groups the runtime, theme and logging parameters into one
//! [`AcademyConfig`] that is loaded from TOML at startup. Every field has a
//! default matching the built-in constants, so a missing file, an empty
//! file or a partial file all behave predictably.
//!
//! ```toml
//! [program]
//! alternate_screen = true
//! mouse = true
//! poll_timeout_ms = 100
//!
//! [theme]
//! emphasized_opacity = 0.55
//! dim_opacity = 0.18
//!
//! [logging]
//! filter = "info"
//! json = false
//! ```

use std::path::Path;
use std::time::Duration;

use academy_style::{DEFAULT_DIM_OPACITY, DEFAULT_EMPHASIZED_OPACITY, Theme};
use serde::{Deserialize, Serialize};

use crate::program::ProgramConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AcademyConfig {
    /// Terminal and event loop settings.
    pub program: ProgramSection,
    /// Circle opacities.
    pub theme: ThemeSection,
    /// Log filter and format.
    pub logging: LoggingConfig,
}

/// `[program]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgramSection {
    pub alternate_screen: bool,
    pub mouse: bool,
    pub poll_timeout_ms: u64,
}

impl Default for ProgramSection {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            mouse: true,
            poll_timeout_ms: 100,
        }
    }
}

/// `[theme]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSection {
    /// Fill opacity of circles whose category is part of the active region.
    pub emphasized_opacity: f32,
    /// Fill opacity of every other circle.
    pub dim_opacity: f32,
}

impl Default for ThemeSection {
    fn default() -> Self {
        Self {
            emphasized_opacity: DEFAULT_EMPHASIZED_OPACITY,
            dim_opacity: DEFAULT_DIM_OPACITY,
        }
    }
}

/// `[logging]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `ACADEMY_LOG` is unset.
    pub filter: String,
    /// Emit JSON lines instead of plain text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
            json: false,
        }
    }
}

/// Errors from loading or validating an [`AcademyConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl AcademyConfig {
    /// Parse from a TOML string and validate.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.check()
    }

    /// Load from a TOML file on disk and validate.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    fn check(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let theme = &self.theme;

        for (name, value) in [
            ("theme.emphasized_opacity", theme.emphasized_opacity),
            ("theme.dim_opacity", theme.dim_opacity),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                errors.push(format!("{name} must be in (0, 1], got {value}"));
            }
        }

        if theme.dim_opacity >= theme.emphasized_opacity {
            errors.push(format!(
                "theme.dim_opacity ({}) must be below theme.emphasized_opacity ({})",
                theme.dim_opacity, theme.emphasized_opacity
            ));
        }

        if self.program.poll_timeout_ms == 0 {
            errors.push("program.poll_timeout_ms must be > 0".into());
        }

        if self.logging.filter.trim().is_empty() {
            errors.push("logging.filter must not be empty".into());
        }

        errors
    }

    /// Runtime settings for [`Program`](crate::Program).
    pub fn to_program_config(&self) -> ProgramConfig {
        ProgramConfig::default()
            .with_alternate_screen(self.program.alternate_screen)
            .with_mouse(self.program.mouse)
            .with_poll_timeout(Duration::from_millis(self.program.poll_timeout_ms))
    }

    /// Theme with the configured opacities.
    pub fn to_theme(&self) -> Theme {
        Theme::default().with_opacities(self.theme.emphasized_opacity, self.theme.dim_opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = AcademyConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.to_program_config(), ProgramConfig::default());
        assert_eq!(config.to_theme(), Theme::default());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = AcademyConfig::from_toml_str("").unwrap();
        assert_eq!(config, AcademyConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = AcademyConfig::from_toml_str(
            r#"
            [program]
            mouse = false

            [theme]
            dim_opacity = 0.1
            "#,
        )
        .unwrap();
        assert!(!config.program.mouse);
        assert!(config.program.alternate_screen);
        assert_eq!(config.theme.dim_opacity, 0.1);
        assert_eq!(config.theme.emphasized_opacity, DEFAULT_EMPHASIZED_OPACITY);
        assert!(!config.to_program_config().mouse);
    }

    #[test]
    fn theme_opacities_flow_into_theme() {
        let config = AcademyConfig::from_toml_str(
            "[theme]\nemphasized_opacity = 0.9\ndim_opacity = 0.3\n",
        )
        .unwrap();
        let theme = config.to_theme();
        assert_eq!(theme.opacity(true), 0.9);
        assert_eq!(theme.opacity(false), 0.3);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = AcademyConfig::from_toml_str(
            "[theme]\nemphasized_opacity = 1.5\ndim_opacity = 0.0\n[program]\npoll_timeout_ms = 0\n",
        )
        .unwrap_err();
        let ConfigError::Validation(errors) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.starts_with("theme.emphasized_opacity")));
        assert!(errors.iter().any(|e| e.starts_with("theme.dim_opacity must be in")));
        assert!(errors.iter().any(|e| e.starts_with("program.poll_timeout_ms")));
    }

    #[test]
    fn dim_must_stay_below_emphasized() {
        let mut config = AcademyConfig::default();
        config.theme.dim_opacity = 0.6;
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("must be below"));
    }

    #[test]
    fn nan_opacity_is_rejected() {
        let mut config = AcademyConfig::default();
        config.theme.emphasized_opacity = f32::NAN;
        assert!(!config.validate().is_empty());
    }

    #[test]
    fn unknown_keys_are_errors() {
        let err = AcademyConfig::from_toml_str("[program]\nmouse_mode = 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn file_round_trip() {
        let mut config = AcademyConfig::default();
        config.logging.json = true;
        config.logging.filter = "academy=debug".to_owned();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.to_toml_string().unwrap().as_bytes())
            .unwrap();
        let loaded = AcademyConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AcademyConfig::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("failed to read config"));
    }
}
