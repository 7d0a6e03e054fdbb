//! Outbound (Driven) ports for the Accounts crate.

use crate::domain::{NewUser, User};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_types::{StoreError, UserId};

/// Persistence for user accounts.
///
/// `insert` must reject a duplicate username or email with
/// `StoreError::Conflict`, naming the offending field, atomically with the
/// write. Emails arrive already lowercased.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;

    async fn find(&self, id: UserId) -> Result<Option<User>, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
}

/// Wall-clock source, abstracted for deterministic token expiry in tests.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
