//! commentsmith: compose end-of-term student comments from selected traits with Gemini.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ComposeOptions, Composition, CredentialStatus, LabelKind, LabelListing, ProfileOptions,
};
pub use app::{AppContext, DisplayText, EditTarget, GenerationOutcome, GenerationTicket, Session};
pub use domain::{AppConfig, AppError, PromptLanguage, Roster, RosterEntry, StudentId, WordLimit};
pub use ports::{GenerationClient, GenerationRequest, KeyValueStore};
pub use services::{FileKeyValueStore, HttpGeminiClient, MemoryKeyValueStore};
