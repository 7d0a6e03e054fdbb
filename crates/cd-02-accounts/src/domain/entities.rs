//! Account entities.

use chrono::{DateTime, Utc};
use shared_types::UserId;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    /// Stored lowercased.
    pub email: String,
    pub username: String,
    /// `hex(salt)$hex(tag)`, see `credentials`.
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// A user ready to be persisted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            username: self.username,
            password_hash: self.password_hash,
            is_active: true,
            created_at: self.created_at,
        }
    }
}

/// Registration payload as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}
