//! Inbound (Driving) port for the Accounts crate.

use crate::domain::{AccountError, Registration, Session, User};
use async_trait::async_trait;
use shared_types::UserId;

/// Primary account API.
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// Validates and stores a new account.
    async fn register(&self, registration: Registration) -> Result<User, AccountError>;

    /// Checks credentials and issues an access token.
    async fn login(&self, username: &str, password: &str) -> Result<Session, AccountError>;

    /// Resolves a bearer token to the active user it names.
    async fn authenticate(&self, token: &str) -> Result<User, AccountError>;

    /// Whether `id` refers to a stored account.
    async fn exists(&self, id: UserId) -> Result<bool, AccountError>;
}
