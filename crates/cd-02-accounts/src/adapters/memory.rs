//! In-memory user store.
//!
//! Uniqueness indexes are updated under the same write lock as the record
//! map, so two concurrent registrations cannot both claim a name.

use crate::domain::{NewUser, User};
use crate::ports::UserStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{StoreError, UserId};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Default)]
struct Inner {
    last_id: u64,
    users: BTreeMap<UserId, User>,
    by_username: HashMap<String, UserId>,
    by_email: HashMap<String, UserId>,
}

/// Process-local `UserStore`.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write();
        if inner.by_username.contains_key(&user.username) {
            return Err(StoreError::Conflict { field: "username" });
        }
        if inner.by_email.contains_key(&user.email) {
            return Err(StoreError::Conflict { field: "email" });
        }

        let id = inner
            .last_id
            .checked_add(1)
            .map(UserId)
            .ok_or(StoreError::IdsExhausted)?;
        inner.last_id = id.get();

        let user = user.into_user(id);
        inner.by_username.insert(user.username.clone(), id);
        inner.by_email.insert(user.email.clone(), id);
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.inner.read().users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .by_username
            .get(username)
            .and_then(|id| inner.users.get(id))
            .cloned())
    }
}
