//! [`OwnerDirectory`] backed by the account service.

use async_trait::async_trait;
use cd_01_calculations::OwnerDirectory;
use cd_02_accounts::{AccountApi, AccountError};
use shared_types::{StoreError, UserId};
use std::sync::Arc;

/// Answers owner-existence checks from the account store.
pub struct AccountDirectory {
    accounts: Arc<dyn AccountApi>,
}

impl AccountDirectory {
    pub fn new(accounts: Arc<dyn AccountApi>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl OwnerDirectory for AccountDirectory {
    async fn owner_exists(&self, owner: UserId) -> Result<bool, StoreError> {
        self.accounts.exists(owner).await.map_err(|e| match e {
            AccountError::Store(store) => store,
            other => StoreError::Unavailable(other.to_string()),
        })
    }
}
