//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together profile resolution,
//! context creation and command execution.

use std::env;
use std::path::{Path, PathBuf};

use crate::app::session::Session;
use crate::app::{
    AppContext,
    commands::{compose, credential, labels, roster},
};
use crate::domain::{AppConfig, load_config};
use crate::services::{FileKeyValueStore, HttpGeminiClient, MemoryKeyValueStore, ProfileStore};

pub use crate::app::commands::compose::{ComposeOptions, Composition};
pub use crate::app::commands::credential::CredentialStatus;
pub use crate::app::commands::labels::{LabelKind, LabelListing};
pub use crate::domain::{AddOutcome, AppError, RosterEntry};

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "COMMENTSMITH_HOME";
/// Config file name inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

const DEFAULT_DIR_NAME: &str = ".commentsmith";

/// Where the profile lives and how it is opened.
#[derive(Debug, Clone, Default)]
pub struct ProfileOptions {
    pub config_path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    /// Keep every slot in memory; nothing is read from or written to disk.
    pub ephemeral: bool,
}

/// Resolve the data directory: explicit path, else `$COMMENTSMITH_HOME`, else `$HOME/.commentsmith`.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf, AppError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(home) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(|home| PathBuf::from(home).join(DEFAULT_DIR_NAME))
        .ok_or_else(|| {
            AppError::config_error(format!(
                "Cannot determine data directory: set {} or HOME, or pass --data-dir",
                HOME_ENV
            ))
        })
}

fn load_profile_config(options: &ProfileOptions) -> Result<AppConfig, AppError> {
    let path = match &options.config_path {
        Some(path) => path.clone(),
        None if options.ephemeral && options.data_dir.is_none() => return Ok(AppConfig::default()),
        None => resolve_data_dir(options.data_dir.as_deref())?.join(CONFIG_FILE),
    };
    load_config(&path)
}

/// Create an `AppContext` for the given profile.
pub fn create_context(
    options: &ProfileOptions,
) -> Result<AppContext<ProfileStore, HttpGeminiClient>, AppError> {
    let config = load_profile_config(options)?;
    let store = if options.ephemeral {
        ProfileStore::Memory(MemoryKeyValueStore::new())
    } else {
        let data_dir = resolve_data_dir(options.data_dir.as_deref())?;
        tracing::debug!(data_dir = %data_dir.display(), "using file store");
        ProfileStore::File(FileKeyValueStore::in_dir(&data_dir))
    };
    let client = HttpGeminiClient::new(&config.generation, config.prompt.language)?;
    Ok(AppContext::new(store, client, config))
}

/// Open an interactive session together with the client it generates through.
pub fn open_session(
    options: &ProfileOptions,
) -> Result<(Session<ProfileStore>, HttpGeminiClient), AppError> {
    let ctx = create_context(options)?;
    let session = ctx.open_session()?;
    let (_, client, _) = ctx.into_parts();
    Ok((session, client))
}

// =============================================================================
// Roster API
// =============================================================================

/// Derived roster for the stored student list.
pub fn roster_show(options: &ProfileOptions) -> Result<Vec<RosterEntry>, AppError> {
    roster::show(&create_context(options)?)
}

/// Replace the stored student list.
pub fn roster_set(options: &ProfileOptions, raw: &str) -> Result<Vec<RosterEntry>, AppError> {
    roster::set(&create_context(options)?, raw)
}

// =============================================================================
// Label API
// =============================================================================

pub fn labels_list(options: &ProfileOptions, kind: LabelKind) -> Result<LabelListing, AppError> {
    labels::list(&create_context(options)?, kind)
}

pub fn labels_add(
    options: &ProfileOptions,
    kind: LabelKind,
    label: &str,
) -> Result<AddOutcome, AppError> {
    labels::add(&create_context(options)?, kind, label)
}

pub fn labels_remove(options: &ProfileOptions, kind: LabelKind, label: &str) -> Result<(), AppError> {
    labels::remove(&create_context(options)?, kind, label)
}

// =============================================================================
// Credential API
// =============================================================================

pub fn key_set(options: &ProfileOptions, raw: &str) -> Result<CredentialStatus, AppError> {
    credential::set(&create_context(options)?, raw)
}

pub fn key_clear(options: &ProfileOptions) -> Result<(), AppError> {
    credential::clear(&create_context(options)?)
}

pub fn key_status(options: &ProfileOptions) -> Result<CredentialStatus, AppError> {
    credential::status(&create_context(options)?)
}

// =============================================================================
// Compose API
// =============================================================================

/// Build the prompt for one student without contacting the provider.
pub fn prompt(options: &ProfileOptions, compose: &ComposeOptions) -> Result<Composition, AppError> {
    compose::prompt(&create_context(options)?, compose)
}

/// Generate a comment for one student.
pub fn generate(options: &ProfileOptions, compose: &ComposeOptions) -> Result<Composition, AppError> {
    compose::generate(&create_context(options)?, compose)
}
