pub mod catalog;
pub mod configuration;
pub mod credential;
pub mod error;
pub mod labels;
pub mod prompt;
pub mod roster;
pub mod settings;

pub use configuration::{
    AppConfig, GenerationApiConfig, LabelConfig, PromptConfig, load_config, parse_config_content,
};
pub use credential::Credential;
pub use error::AppError;
pub use labels::{AddOutcome, CustomLabels, LabelSet};
pub use prompt::{PromptInput, PromptLanguage, build_prompt};
pub use roster::{Roster, RosterEntry, RosterLine, StudentId, derive_roster};
pub use settings::{StudentSettings, WordLimit};
