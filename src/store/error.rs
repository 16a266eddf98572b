//! Store error types.

use thiserror::Error;

/// Errors returned by [`Store`](crate::store::Store) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The key was empty.
    #[error("Key is required")]
    InvalidKey,

    /// The key is not present in the store.
    #[error("Key not found: {0}")]
    NotFound(String),
}
