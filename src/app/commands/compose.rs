//! One-shot prompt preview and comment generation.

use crate::app::AppContext;
use crate::app::session::{GenerationOutcome, Session};
use crate::domain::{AppError, WordLimit};
use crate::ports::{GenerationClient, KeyValueStore};

/// Student and selection for a single composition.
#[derive(Debug, Clone, Default)]
pub struct ComposeOptions {
    /// Position, display label or cleaned name.
    pub student: String,
    pub traits: Vec<String>,
    pub styles: Vec<String>,
    pub word_limit: Option<WordLimit>,
}

/// Text produced for one student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub label: String,
    pub text: String,
}

/// Build the prompt that would be sent for the given selection.
pub fn prompt<S, G>(ctx: &AppContext<S, G>, options: &ComposeOptions) -> Result<Composition, AppError>
where
    S: KeyValueStore + Clone,
    G: GenerationClient,
{
    let mut session = ctx.open_session()?;
    let label = apply(&mut session, options)?;
    let text = session.preview_prompt()?.to_string();
    Ok(Composition { label, text })
}

/// Generate a comment for the given selection.
pub fn generate<S, G>(ctx: &AppContext<S, G>, options: &ComposeOptions) -> Result<Composition, AppError>
where
    S: KeyValueStore + Clone,
    G: GenerationClient,
{
    let mut session = ctx.open_session()?;
    let label = apply(&mut session, options)?;
    match session.generate(ctx.client())? {
        GenerationOutcome::Committed { text, .. } => Ok(Composition { label, text }),
        GenerationOutcome::Discarded { student } => {
            Err(AppError::provider(format!("Result for {} was discarded", student)))
        }
    }
}

fn apply<S: KeyValueStore>(
    session: &mut Session<S>,
    options: &ComposeOptions,
) -> Result<String, AppError> {
    session.select(&options.student)?;
    for label in options.traits.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        if !session.selection().traits.contains(label) {
            session.toggle_trait(label)?;
        }
    }
    for label in options.styles.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        if !session.selection().styles.contains(label) {
            session.toggle_style(label);
        }
    }
    if let Some(limit) = options.word_limit {
        session.set_word_limit(limit);
    }
    let label = session.active_entry().map(|e| e.label().to_string()).unwrap_or_default();
    Ok(label)
}
