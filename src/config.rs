// Run configuration — extraction thresholds with env-var defaults.
//
// The .env file is loaded at startup via dotenvy; CLI flags override env
// values. Validation happens once at the analyze() entry point, before any
// processing.

use std::env;

use thiserror::Error;

pub const DEFAULT_MIN_FREQUENCY: u32 = 2;
pub const DEFAULT_MAX_THEMES: usize = 50;

/// Invalid configuration — the only failure the engine surfaces.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("min_theme_frequency must be at least 1 (got {0})")]
    MinFrequency(u32),
    #[error("max_themes must be at least 1 (got {0})")]
    MaxThemes(usize),
}

/// Thresholds for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Phrases occurring fewer times than this across the corpus are dropped
    pub min_theme_frequency: u32,
    /// Cap on extracted themes per corpus, ranked by frequency
    pub max_themes: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_theme_frequency: DEFAULT_MIN_FREQUENCY,
            max_themes: DEFAULT_MAX_THEMES,
        }
    }
}

impl AnalysisConfig {
    /// Read defaults from SPYGLASS_MIN_FREQUENCY / SPYGLASS_MAX_THEMES.
    ///
    /// Unset or unparsable values fall back to the built-in defaults; an
    /// explicit zero survives so validate() can report it.
    pub fn from_env() -> Self {
        let min_theme_frequency = env::var("SPYGLASS_MIN_FREQUENCY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MIN_FREQUENCY);
        let max_themes = env::var("SPYGLASS_MAX_THEMES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_THEMES);
        Self {
            min_theme_frequency,
            max_themes,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_theme_frequency < 1 {
            return Err(ConfigError::MinFrequency(self.min_theme_frequency));
        }
        if self.max_themes < 1 {
            return Err(ConfigError::MaxThemes(self.max_themes));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(AnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_min_frequency_is_rejected() {
        let config = AnalysisConfig {
            min_theme_frequency: 0,
            max_themes: 50,
        };
        assert_eq!(config.validate(), Err(ConfigError::MinFrequency(0)));
    }

    #[test]
    fn zero_max_themes_is_rejected() {
        let config = AnalysisConfig {
            min_theme_frequency: 2,
            max_themes: 0,
        };
        assert_eq!(config.validate(), Err(ConfigError::MaxThemes(0)));
    }

    #[test]
    fn error_messages_name_the_offending_value() {
        let err = ConfigError::MaxThemes(0);
        assert!(err.to_string().contains("max_themes"));
    }
}
