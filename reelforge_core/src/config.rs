//! Site configuration.
//!
//! The landing app embeds `site.toml` at build time and hands it to
//! [`SiteConfig::from_toml_str`]. Every key is optional; missing keys keep
//! their defaults.

use serde::Deserialize;

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Maximum level forwarded to the browser console.
    pub log_level: LogLevel,
    /// Product naming shown in nav and footer.
    pub brand: BrandConfig,
    /// Project wizard tuning.
    pub wizard: WizardConfig,
}

/// Product naming
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    /// Product name, e.g. "ReelForge".
    pub name: String,
    /// Year printed in the footer copyright line.
    pub copyright_year: u16,
}

/// Project wizard tuning
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Suggestions appear once the description is longer than this many
    /// characters.
    pub suggestion_threshold: usize,
    /// Clear suggestions when the description drops back to the threshold
    /// or below. `false` keeps the last list on screen.
    pub clear_stale_suggestions: bool,
    /// Number of description words quoted in the script preview.
    pub preview_word_count: usize,
}

/// Log verbosity, mirrors `tracing::Level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including suggestion refreshes.
    Trace,
    /// Step transitions and gated no-ops.
    Debug,
    /// Wizard open/close.
    #[default]
    Info,
    /// Rejected input and config fallbacks.
    Warn,
    /// Errors only.
    Error,
}

impl LogLevel {
    /// The matching `tracing` level.
    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "ReelForge".to_string(),
            copyright_year: 2024,
        }
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            suggestion_threshold: 10,
            clear_stale_suggestions: true,
            preview_word_count: 5,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.brand.name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "brand.name",
                reason: "must not be empty",
            });
        }
        if self.wizard.preview_word_count == 0 {
            return Err(ConfigError::Invalid {
                field: "wizard.preview_word_count",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Footer copyright line.
    pub fn copyright_line(&self) -> String {
        format!(
            "© {} {}. All rights reserved.",
            self.brand.copyright_year, self.brand.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.brand.name, "ReelForge");
        assert_eq!(config.wizard.suggestion_threshold, 10);
        assert!(config.wizard.clear_stale_suggestions);
        assert_eq!(config.wizard.preview_word_count, 5);
    }

    #[test]
    fn test_load_empty_config() {
        let config = SiteConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
log_level = "debug"

[wizard]
clear_stale_suggestions = false
"#,
        )
        .expect("partial config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(!config.wizard.clear_stale_suggestions);
        assert_eq!(config.wizard.suggestion_threshold, 10);
        assert_eq!(config.brand.name, "ReelForge");
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let err = SiteConfig::from_toml_str(r#"log_level = "loud""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_zero_preview_words() {
        let err = SiteConfig::from_toml_str("[wizard]\npreview_word_count = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "wizard.preview_word_count",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_blank_brand_name() {
        let err = SiteConfig::from_toml_str("[brand]\nname = \"  \"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "brand.name", .. }));
    }

    #[test]
    fn test_copyright_line() {
        let config = SiteConfig::default();
        assert_eq!(config.copyright_line(), "© 2024 ReelForge. All rights reserved.");
    }

    #[test]
    fn test_log_level_maps_to_tracing() {
        assert_eq!(LogLevel::Warn.as_tracing_level(), tracing::Level::WARN);
        assert_eq!(LogLevel::Trace.as_tracing_level(), tracing::Level::TRACE);
    }
}
