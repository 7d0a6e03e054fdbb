//! Outbound (Driven) ports for the Calculations crate.
//!
//! Persistence and user lookup are collaborators; the domain never knows
//! what backs them.

use crate::domain::{Calculation, CalculationDraft};
use async_trait::async_trait;
use shared_types::{CalculationId, StoreError, UserId};

/// Persistence for calculation records, keyed by integer id.
///
/// Implementations must make each single-row operation atomic. Operand
/// values and order must round-trip exactly.
#[async_trait]
pub trait CalculationStore: Send + Sync {
    /// Persists a draft and returns the id assigned to it.
    async fn insert(&self, draft: CalculationDraft) -> Result<CalculationId, StoreError>;

    /// Replaces the fields of record `id` if it is still owned by `owner`.
    ///
    /// The owner check and the write happen atomically. Returns `false` if
    /// no such record exists or it now belongs to someone else.
    async fn update(
        &self,
        id: CalculationId,
        owner: UserId,
        draft: CalculationDraft,
    ) -> Result<bool, StoreError>;

    /// Removes record `id` if it is still owned by `owner`.
    ///
    /// Returns `false` if it did not exist or belongs to someone else.
    async fn delete(&self, id: CalculationId, owner: UserId) -> Result<bool, StoreError>;

    /// Looks up a single record.
    async fn find(&self, id: CalculationId) -> Result<Option<Calculation>, StoreError>;

    /// All records owned by `owner`, in ascending id order.
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Calculation>, StoreError>;
}

/// Answers whether a user id refers to an existing account.
///
/// Used when a record is reassigned to another owner.
#[async_trait]
pub trait OwnerDirectory: Send + Sync {
    async fn owner_exists(&self, owner: UserId) -> Result<bool, StoreError>;
}
