//! Comment generation port definition.

use std::fmt;

use crate::domain::{AppError, WordLimit};

/// Everything needed to generate one comment.
///
/// Carries the prompt inputs rather than a finished prompt so the transmitted text
/// always comes from the current prompt builder.
#[derive(Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Raw API key. Clients must refuse an empty value without touching the network.
    pub credential: String,
    pub student_name: String,
    pub traits: Vec<String>,
    pub styles: Vec<String>,
    pub word_limit: WordLimit,
}

impl fmt::Debug for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationRequest")
            .field("credential", &"[REDACTED]")
            .field("student_name", &self.student_name)
            .field("traits", &self.traits)
            .field("styles", &self.styles)
            .field("word_limit", &self.word_limit)
            .finish()
    }
}

/// Port for the third-party text generation service.
pub trait GenerationClient {
    /// Perform exactly one generation call and return the model's text.
    fn generate(&self, request: &GenerationRequest) -> Result<String, AppError>;
}
