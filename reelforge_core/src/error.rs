//! Error types for the two parse boundaries of the site.
//!
//! Wizard operations themselves never fail: an incomplete brief only
//! disables the forward button. Errors appear where outside text enters the
//! model: `<select>` values coming from the DOM and the embedded TOML config.

use thiserror::Error;

/// A `<select>` value that does not name any known option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseOptionError {
    /// Option family, e.g. `"duration"`.
    pub kind: &'static str,
    /// The rejected raw value.
    pub value: String,
}

impl ParseOptionError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Failure to load a [`SiteConfig`](crate::SiteConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid TOML or has mistyped keys.
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The document parsed but a value is out of range.
    #[error("invalid site config: {field} {reason}")]
    Invalid {
        /// Dotted key path of the offending value.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_option_error_names_kind_and_value() {
        let err = ParseOptionError::new("platform", "myspace");
        assert_eq!(err.to_string(), "unknown platform 'myspace'");
    }

    #[test]
    fn invalid_config_error_message() {
        let err = ConfigError::Invalid {
            field: "wizard.preview_word_count",
            reason: "must be at least 1",
        };
        assert_eq!(
            err.to_string(),
            "invalid site config: wizard.preview_word_count must be at least 1"
        );
    }
}
