//! Configuration management for the advisor.
//!
//! Settings come from a TOML file; every field has a default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::knowledge_base::Language;

/// Which diagnosis provider to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticsMode {
    #[default]
    Simulated,
    /// Trained model behind an HTTP endpoint. Falls back to simulated
    /// results while no inference client exists.
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DiagnosticsConfig {
    #[serde(default)]
    pub mode: DiagnosticsMode,

    /// Model endpoint, used only in `model` mode.
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Top-level advisor settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Reply language when a request names none.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Cached replies kept; 0 disables the cache.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Seed for reply variation and simulated diagnoses.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_cache_capacity() -> usize {
    128
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            cache_capacity: default_cache_capacity(),
            seed: None,
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}

impl AdvisorConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse settings; missing fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render settings as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The default reply language; unsupported codes mean English.
    pub fn language(&self) -> Language {
        Language::from_code_or_default(&self.default_language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisorError;

    #[test]
    fn test_defaults() {
        let config = AdvisorConfig::from_toml_str("").unwrap();
        assert_eq!(config, AdvisorConfig::default());
        assert_eq!(config.cache_capacity, 128);
        assert_eq!(config.language(), Language::En);
        assert_eq!(config.diagnostics.mode, DiagnosticsMode::Simulated);
    }

    #[test]
    fn test_full_config() {
        let config = AdvisorConfig::from_toml_str(
            r#"
            default_language = "hi"
            cache_capacity = 0
            seed = 42

            [diagnostics]
            mode = "model"
            endpoint = "http://localhost:8500/v1/predict"
            "#,
        )
        .unwrap();

        assert_eq!(config.language(), Language::Hi);
        assert_eq!(config.cache_capacity, 0);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.diagnostics.mode, DiagnosticsMode::Model);
        assert_eq!(
            config.diagnostics.endpoint.as_deref(),
            Some("http://localhost:8500/v1/predict")
        );
    }

    #[test]
    fn test_unknown_language_means_english() {
        let config = AdvisorConfig::from_toml_str(r#"default_language = "fr""#).unwrap();
        assert_eq!(config.language(), Language::En);
    }

    #[test]
    fn test_invalid_mode_is_an_error() {
        let err = AdvisorConfig::from_toml_str("[diagnostics]\nmode = \"cloud\"").unwrap_err();
        assert!(matches!(err, AdvisorError::Toml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AdvisorConfig::load("/nonexistent/agriguard.toml").unwrap_err();
        assert!(matches!(err, AdvisorError::Io(_)));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = AdvisorConfig::default();
        config.seed = Some(7);
        let text = config.to_toml_string().unwrap();
        assert_eq!(AdvisorConfig::from_toml_str(&text).unwrap(), config);
    }
}
