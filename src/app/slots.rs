//! Typed access to the named persistent slots.

use crate::domain::{AppError, Credential};
use crate::ports::KeyValueStore;

pub const STUDENT_LIST_KEY: &str = "studentListRaw";
pub const CUSTOM_TRAITS_KEY: &str = "customTraits";
pub const CUSTOM_STYLES_KEY: &str = "customStyles";
pub const CREDENTIAL_KEY: &str = "apiCredential";

/// The four durable slots: raw student list, custom traits, custom styles, credential.
#[derive(Debug, Clone)]
pub struct ProfileSlots<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ProfileSlots<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Raw student list text; empty when never saved.
    pub fn student_list(&self) -> Result<String, AppError> {
        Ok(self.store.get(STUDENT_LIST_KEY)?.unwrap_or_default())
    }

    pub fn save_student_list(&self, raw: &str) -> Result<(), AppError> {
        self.store.set(STUDENT_LIST_KEY, raw)
    }

    pub fn custom_traits(&self) -> Result<Vec<String>, AppError> {
        self.label_list(CUSTOM_TRAITS_KEY)
    }

    pub fn save_custom_traits(&self, labels: &[String]) -> Result<(), AppError> {
        self.store.set(CUSTOM_TRAITS_KEY, &serde_json::to_string(labels)?)
    }

    pub fn custom_styles(&self) -> Result<Vec<String>, AppError> {
        self.label_list(CUSTOM_STYLES_KEY)
    }

    pub fn save_custom_styles(&self, labels: &[String]) -> Result<(), AppError> {
        self.store.set(CUSTOM_STYLES_KEY, &serde_json::to_string(labels)?)
    }

    pub fn credential(&self) -> Result<Option<Credential>, AppError> {
        Ok(self.store.get(CREDENTIAL_KEY)?.as_deref().and_then(Credential::parse))
    }

    /// Store the trimmed credential, or clear the slot when `raw` is blank.
    pub fn save_credential(&self, raw: &str) -> Result<Option<Credential>, AppError> {
        match Credential::parse(raw) {
            Some(credential) => {
                self.store.set(CREDENTIAL_KEY, credential.expose())?;
                Ok(Some(credential))
            }
            None => {
                self.store.remove(CREDENTIAL_KEY)?;
                Ok(None)
            }
        }
    }

    fn label_list(&self, key: &str) -> Result<Vec<String>, AppError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(labels) => Ok(labels),
            Err(err) => {
                tracing::warn!(key, error = %err, "ignoring malformed label slot");
                Ok(Vec::new())
            }
        }
    }
}
