//! Durable key-value storage for cart state.
//!
//! The cart only needs what browser local storage offers: string values under
//! string keys, read at startup and overwritten after every change.
//!
//! # Backends
//!
//! - [`MemoryStore`] - `HashMap`-backed, with an optional byte quota
//! - [`FileStore`] - one file per key inside a directory, survives restarts

mod file;
mod memory;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors that can occur while reading or writing storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Writing the value would push the store past its size limit.
    #[error("Storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded {
        /// Bytes the store would hold after the write.
        needed: usize,
        /// Configured limit.
        quota: usize,
    },

    /// The key cannot be used by this backend.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Underlying filesystem operation failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A synchronous string key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write is rejected or fails.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Check that a key is usable by every backend.
///
/// Keys double as file names in [`FileStore`], so they are limited to ASCII
/// letters, digits, `-`, `_` and `.`, and may not start with a dot.
///
/// # Errors
///
/// Returns [`StorageError::InvalidKey`] if the key is empty or contains other
/// characters.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
