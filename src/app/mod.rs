pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod session;
pub mod slots;

pub use context::AppContext;
pub use session::{DisplayText, EditTarget, GenerationOutcome, GenerationTicket, Selection, Session};
