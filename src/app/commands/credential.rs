use crate::app::AppContext;
use crate::app::session::Session;
use crate::domain::AppError;
use crate::ports::{GenerationClient, KeyValueStore};

/// What the CLI may reveal about the stored credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialStatus {
    /// Masked form of the key; `None` when no key is stored.
    pub masked: Option<String>,
    pub well_formed: bool,
}

pub fn set<S, G>(ctx: &AppContext<S, G>, raw: &str) -> Result<CredentialStatus, AppError>
where
    S: KeyValueStore + Clone,
    G: GenerationClient,
{
    let mut session = ctx.open_session()?;
    session.set_credential(raw)?;
    Ok(describe(&session))
}

pub fn clear<S, G>(ctx: &AppContext<S, G>) -> Result<(), AppError>
where
    S: KeyValueStore + Clone,
    G: GenerationClient,
{
    let mut session = ctx.open_session()?;
    session.set_credential("")?;
    Ok(())
}

pub fn status<S, G>(ctx: &AppContext<S, G>) -> Result<CredentialStatus, AppError>
where
    S: KeyValueStore + Clone,
    G: GenerationClient,
{
    let session = ctx.open_session()?;
    Ok(describe(&session))
}

fn describe<S: KeyValueStore>(session: &Session<S>) -> CredentialStatus {
    match session.credential() {
        Some(credential) => CredentialStatus {
            masked: Some(credential.masked()),
            well_formed: credential.has_expected_format(),
        },
        None => CredentialStatus { masked: None, well_formed: false },
    }
}
