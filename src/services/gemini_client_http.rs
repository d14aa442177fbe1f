//! Gemini `generateContent` client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GenerationApiConfig, PromptInput, PromptLanguage, build_prompt};
use crate::ports::{GenerationClient, GenerationRequest};

const X_GOOG_API_KEY: &str = "x-goog-api-key";
const GENERIC_FAILURE: &str = "An error occurred while generating the comment";
// Not JSON, so classification falls through to the status code and the generic message.
const UNREADABLE_BODY: &str = "<unreadable response body>";

/// HTTP client for the Gemini API.
#[derive(Debug, Clone)]
pub struct HttpGeminiClient {
    endpoint: Url,
    language: PromptLanguage,
    client: Client,
}

impl HttpGeminiClient {
    /// Create a client for the configured model.
    pub fn new(config: &GenerationApiConfig, language: PromptLanguage) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { endpoint: endpoint_for(config)?, language, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn endpoint_for(config: &GenerationApiConfig) -> Result<Url, AppError> {
    let base = config.api_base_url.as_str().trim_end_matches('/');
    let raw = format!("{}/models/{}:generateContent", base, config.model);
    Url::parse(&raw)
        .map_err(|e| AppError::InvalidConfig(format!("Invalid generation endpoint '{}': {}", raw, e)))
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    contents: Vec<ApiContent<'a>>,
}

#[derive(Debug, Serialize)]
struct ApiContent<'a> {
    parts: Vec<ApiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct ApiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

impl ApiResponse {
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
            .unwrap_or_default()
    }
}

impl GenerationClient for HttpGeminiClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, AppError> {
        if request.credential.trim().is_empty() {
            return Err(AppError::MissingCredential);
        }

        let input = PromptInput {
            student_name: &request.student_name,
            traits: &request.traits,
            styles: &request.styles,
            word_limit: request.word_limit,
        };
        let prompt = build_prompt(&input, self.language);
        let body = ApiRequest { contents: vec![ApiContent { parts: vec![ApiPart { text: &prompt }] }] };

        tracing::debug!(endpoint = %self.endpoint, prompt_chars = prompt.chars().count(), "sending generateContent request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, request.credential.trim())
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .map_err(|e| {
                tracing::warn!(error = %e, "generateContent transport failure");
                AppError::provider(format!("HTTP request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_else(|_| UNREADABLE_BODY.to_string());
            let error = classify_failure(status, &text);
            tracing::warn!(status = status.as_u16(), error = %error, "generateContent failed");
            return Err(error);
        }

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| AppError::provider(format!("Failed to parse response: {}", e)))?;

        let text = api_response.into_text();
        if text.trim().is_empty() {
            return Err(AppError::EmptyResponse);
        }
        Ok(text)
    }
}

/// Map a non-success response to the user-facing error category.
fn classify_failure(status: StatusCode, body: &str) -> AppError {
    let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok().map(|e| e.error);
    let provider_status = envelope.as_ref().and_then(|e| e.status.as_deref());

    if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        || matches!(provider_status, Some("PERMISSION_DENIED" | "UNAUTHENTICATED"))
    {
        return AppError::CredentialRejected;
    }
    if status == StatusCode::TOO_MANY_REQUESTS || provider_status == Some("RESOURCE_EXHAUSTED") {
        return AppError::RateLimited;
    }

    let message = envelope
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE.to_string());
    AppError::provider(message)
}
