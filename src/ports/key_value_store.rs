//! Persistent key-value store port.

use crate::domain::AppError;

/// Durable string slots addressed by key.
///
/// Writes are synchronous and last-write-wins.
pub trait KeyValueStore {
    /// Read a slot. A missing slot is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Overwrite a slot.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Delete a slot. Removing a missing slot is not an error.
    fn remove(&self, key: &str) -> Result<(), AppError>;
}
