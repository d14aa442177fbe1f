use crate::app::AppContext;
use crate::domain::{AppError, RosterEntry};
use crate::ports::{GenerationClient, KeyValueStore};

/// Derived roster for the stored student list.
pub fn show<S, G>(ctx: &AppContext<S, G>) -> Result<Vec<RosterEntry>, AppError>
where
    S: KeyValueStore + Clone,
    G: GenerationClient,
{
    let session = ctx.open_session()?;
    Ok(session.roster().entries().to_vec())
}

/// Replace the stored student list and return the new roster.
pub fn set<S, G>(ctx: &AppContext<S, G>, raw: &str) -> Result<Vec<RosterEntry>, AppError>
where
    S: KeyValueStore + Clone,
    G: GenerationClient,
{
    let mut session = ctx.open_session()?;
    session.set_student_list(raw)?;
    Ok(session.roster().entries().to_vec())
}
