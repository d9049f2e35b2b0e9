//! Error types for cart operations and rendering.
//!
//! Cart mutations return `Result<(), CartError>`. The only way a mutation
//! fails is when the new state cannot be written back to storage; the
//! in-memory cart still holds the change in that case.

use thiserror::Error;

use crate::storage::StorageError;

/// Failure to persist the cart after a mutation.
#[derive(Debug, Error)]
pub enum CartError {
    /// The storage backend rejected or failed the write.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The item list could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failure to render a cart view.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}
