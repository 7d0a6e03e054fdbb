//! Account error types.

use shared_types::{StoreError, TokenError};
use thiserror::Error;

/// Account error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// A registration field broke a rule.
    #[error("{field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Username or email already registered.
    #[error("{field} already registered")]
    Conflict { field: &'static str },

    /// Unknown user, wrong password or inactive account.
    ///
    /// The three cases are deliberately indistinguishable.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Presented access token was rejected.
    #[error("Could not validate credentials: {0}")]
    InvalidToken(#[from] TokenError),

    /// Stored password hash could not be parsed.
    #[error("Corrupt credential record")]
    CorruptCredential,

    /// The store failed.
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for AccountError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Conflict { field } => AccountError::Conflict { field },
            other => AccountError::Store(other),
        }
    }
}
