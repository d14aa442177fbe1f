//! Configuration loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::{AppConfig, AppError};

/// Load configuration from `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config_content(&content),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(AppConfig::default())
        }
        Err(err) => Err(AppError::config_error(format!(
            "Failed to read config {}: {}",
            path.display(),
            err
        ))),
    }
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PromptLanguage;

    #[test]
    fn app_config_parses_from_toml() {
        let toml = r#"
[generation]
api_base_url = "http://localhost:8080/v1"
model = "gemini-test"
timeout_secs = 5

[labels]
custom_trait_cap = 3
custom_style_cap = 4

[prompt]
language = "en"
default_word_limit = 200
"#;
        let config = parse_config_content(toml).unwrap();
        assert_eq!(config.generation.api_base_url.as_str(), "http://localhost:8080/v1");
        assert_eq!(config.generation.model, "gemini-test");
        assert_eq!(config.generation.timeout_secs, Some(5));
        assert_eq!(config.labels.custom_trait_cap, 3);
        assert_eq!(config.labels.custom_style_cap, Some(4));
        assert_eq!(config.prompt.language, PromptLanguage::English);
        assert_eq!(config.prompt.default_word_limit.get(), 200);
    }

    #[test]
    fn empty_content_yields_defaults() {
        let config = parse_config_content("").unwrap();
        assert_eq!(config.labels.custom_trait_cap, 10);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse_config_content("[labels]\nmax = 3\n").unwrap_err();
        assert!(matches!(err, AppError::TomlParseError(_)));
    }

    #[test]
    fn zero_word_limit_is_rejected() {
        assert!(parse_config_content("[prompt]\ndefault_word_limit = 0\n").is_err());
    }

    #[test]
    fn validation_runs_after_parse() {
        let err = parse_config_content("[labels]\ncustom_trait_cap = 0\n").unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(msg) if msg.contains("custom_trait_cap")));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.generation.model, "gemini-3-flash-preview");
    }
}
