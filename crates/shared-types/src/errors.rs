//! # Error Types
//!
//! Errors returned by persistence ports.

use thiserror::Error;

/// Errors that can occur in any record store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated.
    #[error("Conflict: {field} already in use")]
    Conflict { field: &'static str },

    /// The backing store could not be reached or failed mid-operation.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Identifier space is exhausted.
    #[error("Identifier space exhausted")]
    IdsExhausted,
}
