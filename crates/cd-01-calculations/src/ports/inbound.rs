//! # Inbound Port - CalculationApi
//!
//! Primary driving port exposing calculation management.
//!
//! ## Ownership
//!
//! Every method takes the authenticated caller as `owner`. Records owned by
//! anyone else behave exactly like records that do not exist.

use crate::domain::{CalculationError, CalculationPatch, CalculationView, NewCalculationRequest};
use async_trait::async_trait;
use shared_types::{CalculationId, UserId};

/// Primary API for calculation records.
///
/// # Example
///
/// ```rust,ignore
/// use cd_01_calculations::{CalculationApi, NewCalculationRequest};
///
/// async fn example(api: &dyn CalculationApi, owner: UserId) {
///     let view = api
///         .create(owner, NewCalculationRequest { kind: "division".into(), operands: vec![8.0, 2.0, 2.0] })
///         .await?;
///     assert_eq!(view.result, Ok(2.0));
/// }
/// ```
#[async_trait]
pub trait CalculationApi: Send + Sync {
    /// Validates and persists a new record owned by `owner`.
    ///
    /// # Errors
    /// - `Validation`: the request broke a rule; nothing was stored
    /// - `Store`: persistence failed
    async fn create(
        &self,
        owner: UserId,
        request: NewCalculationRequest,
    ) -> Result<CalculationView, CalculationError>;

    /// Reads one record with a freshly computed result.
    async fn get(&self, owner: UserId, id: CalculationId)
        -> Result<CalculationView, CalculationError>;

    /// Reads every record owned by `owner`.
    async fn list(&self, owner: UserId) -> Result<Vec<CalculationView>, CalculationError>;

    /// Applies a partial update after re-validating the merged record.
    ///
    /// # Errors
    /// - `NotFound`: absent or not owned by `owner`
    /// - `Validation`: merged state broke a rule, or the new owner is unknown
    async fn update(
        &self,
        owner: UserId,
        id: CalculationId,
        patch: CalculationPatch,
    ) -> Result<CalculationView, CalculationError>;

    /// Deletes a record owned by `owner`.
    async fn delete(&self, owner: UserId, id: CalculationId) -> Result<(), CalculationError>;
}
