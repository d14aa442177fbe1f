//! Application configuration models loaded from `config.toml`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::catalog::DEFAULT_WORD_LIMIT;
use crate::domain::{AppError, PromptLanguage, WordLimit};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Generation API configuration.
    #[serde(default)]
    pub generation: GenerationApiConfig,
    /// Custom label limits.
    #[serde(default)]
    pub labels: LabelConfig,
    /// Prompt defaults.
    #[serde(default)]
    pub prompt: PromptConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.generation.validate()?;
        self.labels.validate()?;
        Ok(())
    }
}

/// Gemini API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationApiConfig {
    /// Base URL up to and including the API version segment.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: Url,
    /// Model name used in `models/{model}:generateContent`.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds. Unset leaves the transport default in place.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for GenerationApiConfig {
    fn default() -> Self {
        Self { api_base_url: default_api_base_url(), model: default_model(), timeout_secs: None }
    }
}

impl GenerationApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("generation.model must not be empty".to_string()));
        }
        if self.model.contains('/') || self.model.contains(':') {
            return Err(AppError::InvalidConfig(format!(
                "generation.model '{}' must be a bare model name",
                self.model
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::InvalidConfig(
                "generation.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.api_base_url.cannot_be_a_base() {
            return Err(AppError::InvalidConfig(format!(
                "generation.api_base_url '{}' is not a base URL",
                self.api_base_url
            )));
        }
        Ok(())
    }
}

fn default_api_base_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

/// Caps for the user-defined label lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelConfig {
    #[serde(default = "default_custom_trait_cap")]
    pub custom_trait_cap: usize,
    /// Unset means the style list is unbounded.
    #[serde(default)]
    pub custom_style_cap: Option<usize>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self { custom_trait_cap: default_custom_trait_cap(), custom_style_cap: None }
    }
}

impl LabelConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.custom_trait_cap == 0 {
            return Err(AppError::InvalidConfig(
                "labels.custom_trait_cap must be greater than 0".to_string(),
            ));
        }
        if self.custom_style_cap == Some(0) {
            return Err(AppError::InvalidConfig(
                "labels.custom_style_cap must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_custom_trait_cap() -> usize {
    10
}

/// Prompt defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptConfig {
    #[serde(default)]
    pub language: PromptLanguage,
    /// Word limit shown before any student has been configured.
    #[serde(default = "default_word_limit")]
    pub default_word_limit: WordLimit,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self { language: PromptLanguage::default(), default_word_limit: default_word_limit() }
    }
}

fn default_word_limit() -> WordLimit {
    WordLimit::new(DEFAULT_WORD_LIMIT).expect("default word limit must be positive")
}
