use std::io;

use thiserror::Error;

/// Library-wide error type for commentsmith operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration value failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Preview or generation requested with no active student.
    #[error("No student selected. Select a student first.")]
    NoStudentSelected,

    /// Preview or generation requested with an empty trait selection.
    #[error("No traits selected. Select at least one trait first.")]
    NoTraitsSelected,

    /// Generation requested without a stored credential.
    #[error("No API key set. Run 'commentsmith key set <KEY>' or use 'key <KEY>' in a session.")]
    MissingCredential,

    /// A generation request is already outstanding.
    #[error("A comment is already being generated")]
    GenerationInProgress,

    /// Word limit must be a positive integer.
    #[error("Invalid word limit '{0}': must be a positive integer")]
    InvalidWordLimit(String),

    /// Student query did not match any roster entry.
    #[error("Student '{0}' not found in the roster")]
    StudentNotFound(String),

    /// Label is not in the custom list.
    #[error("'{0}' is not a custom label")]
    LabelNotFound(String),

    /// Provider rejected the credential.
    #[error("API key is invalid or lacks permission")]
    CredentialRejected,

    /// Provider throttled the request.
    #[error("Too many requests, please try again later")]
    RateLimited,

    /// Provider returned no text.
    #[error("The AI response was empty")]
    EmptyResponse,

    /// Any other provider or transport failure.
    #[error("{message}")]
    Provider { message: String },

    /// Interactive terminal prompt failed.
    #[error("Interactive prompt failed: {0}")]
    Interaction(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn provider<S: Into<String>>(message: S) -> Self {
        AppError::Provider { message: message.into() }
    }

    /// Errors raised by the preview/generate gate and input checks. Nothing is mutated
    /// when one of these is returned.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::NoStudentSelected
                | AppError::NoTraitsSelected
                | AppError::MissingCredential
                | AppError::GenerationInProgress
                | AppError::InvalidWordLimit(_)
                | AppError::StudentNotFound(_)
                | AppError::LabelNotFound(_)
        )
    }
}
