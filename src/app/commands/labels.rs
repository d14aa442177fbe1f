use crate::app::AppContext;
use crate::domain::catalog::{self, STYLE_OPTIONS};
use crate::domain::{AddOutcome, AppError};
use crate::ports::{GenerationClient, KeyValueStore};

/// Which custom label list a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Trait,
    Style,
}

impl LabelKind {
    pub fn noun(self) -> &'static str {
        match self {
            LabelKind::Trait => "trait",
            LabelKind::Style => "style",
        }
    }
}

/// Built-in and custom labels of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelListing {
    /// Built-in labels grouped by category name.
    pub builtin: Vec<(String, Vec<String>)>,
    pub custom: Vec<String>,
}

pub fn list<S, G>(ctx: &AppContext<S, G>, kind: LabelKind) -> Result<LabelListing, AppError>
where
    S: KeyValueStore + Clone,
    G: GenerationClient,
{
    let session = ctx.open_session()?;
    let listing = match kind {
        LabelKind::Trait => LabelListing {
            builtin: catalog::TRAIT_CATEGORIES
                .iter()
                .map(|c| (c.name.to_string(), c.traits.iter().map(|t| t.to_string()).collect()))
                .collect(),
            custom: session.custom_traits().to_vec(),
        },
        LabelKind::Style => LabelListing {
            builtin: STYLE_OPTIONS
                .iter()
                .map(|s| (s.name.to_string(), vec![s.description.to_string(), s.example.to_string()]))
                .collect(),
            custom: session.custom_styles().to_vec(),
        },
    };
    Ok(listing)
}

pub fn add<S, G>(ctx: &AppContext<S, G>, kind: LabelKind, label: &str) -> Result<AddOutcome, AppError>
where
    S: KeyValueStore + Clone,
    G: GenerationClient,
{
    let mut session = ctx.open_session()?;
    match kind {
        LabelKind::Trait => session.add_custom_trait(label),
        LabelKind::Style => session.add_custom_style(label),
    }
}

pub fn remove<S, G>(ctx: &AppContext<S, G>, kind: LabelKind, label: &str) -> Result<(), AppError>
where
    S: KeyValueStore + Clone,
    G: GenerationClient,
{
    let label = label.trim();
    let builtin = match kind {
        LabelKind::Trait => catalog::is_builtin_trait(label),
        LabelKind::Style => catalog::is_builtin_style(label),
    };
    if builtin {
        return Err(AppError::config_error(format!(
            "'{}' is a built-in {} and cannot be removed",
            label,
            kind.noun()
        )));
    }

    let mut session = ctx.open_session()?;
    match kind {
        LabelKind::Trait => session.delete_custom_trait(label).map(|_| ()),
        LabelKind::Style => session.delete_custom_style(label),
    }
}
