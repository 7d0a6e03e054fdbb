//! Calculation service - implements [`CalculationApi`] over the outbound ports.

use crate::domain::{
    Calculation, CalculationError, CalculationPatch, CalculationValidator, CalculationView,
    NewCalculationRequest, ValidationError,
};
use crate::ports::{CalculationApi, CalculationStore, OwnerDirectory};
use async_trait::async_trait;
use shared_types::{CalculationId, UserId};
use std::sync::Arc;
use tracing::{debug, warn};

/// Validates, persists and reads calculation records.
pub struct CalculationService {
    store: Arc<dyn CalculationStore>,
    owners: Option<Arc<dyn OwnerDirectory>>,
    validator: CalculationValidator,
}

impl CalculationService {
    pub fn new(store: Arc<dyn CalculationStore>, validator: CalculationValidator) -> Self {
        Self {
            store,
            owners: None,
            validator,
        }
    }

    /// Checks reassignment targets against `owners`.
    ///
    /// Without a directory, any owner id is accepted.
    pub fn with_owner_directory(mut self, owners: Arc<dyn OwnerDirectory>) -> Self {
        self.owners = Some(owners);
        self
    }

    /// Loads a record, hiding it unless `owner` owns it.
    async fn find_owned(
        &self,
        owner: UserId,
        id: CalculationId,
    ) -> Result<Calculation, CalculationError> {
        match self.store.find(id).await? {
            Some(record) if record.owner() == owner => Ok(record),
            _ => Err(CalculationError::NotFound(id)),
        }
    }

    async fn ensure_owner_exists(&self, owner: UserId) -> Result<(), CalculationError> {
        let Some(owners) = &self.owners else {
            return Ok(());
        };
        if owners.owner_exists(owner).await? {
            Ok(())
        } else {
            Err(ValidationError::UnknownOwner { owner }.into())
        }
    }
}

#[async_trait]
impl CalculationApi for CalculationService {
    async fn create(
        &self,
        owner: UserId,
        request: NewCalculationRequest,
    ) -> Result<CalculationView, CalculationError> {
        let draft = self
            .validator
            .validate_create(owner, request)
            .inspect_err(|e| warn!(owner = %owner, field = e.field(), "Rejected calculation: {e}"))?;

        let id = self.store.insert(draft.clone()).await?;
        debug!(owner = %owner, id = %id, kind = %draft.kind(), "Calculation created");

        Ok(draft.into_record(id).view())
    }

    async fn get(
        &self,
        owner: UserId,
        id: CalculationId,
    ) -> Result<CalculationView, CalculationError> {
        Ok(self.find_owned(owner, id).await?.view())
    }

    async fn list(&self, owner: UserId) -> Result<Vec<CalculationView>, CalculationError> {
        let records = self.store.list_by_owner(owner).await?;
        debug!(owner = %owner, count = records.len(), "Listed calculations");
        Ok(records.iter().map(Calculation::view).collect())
    }

    async fn update(
        &self,
        owner: UserId,
        id: CalculationId,
        patch: CalculationPatch,
    ) -> Result<CalculationView, CalculationError> {
        let existing = self.find_owned(owner, id).await?;
        let new_owner = patch.owner;

        let draft = self
            .validator
            .validate_update(&existing, patch)
            .inspect_err(|e| warn!(owner = %owner, id = %id, field = e.field(), "Rejected update: {e}"))?;

        if let Some(new_owner) = new_owner.filter(|o| *o != owner) {
            self.ensure_owner_exists(new_owner).await?;
        }

        if !self.store.update(id, owner, draft.clone()).await? {
            // Deleted or reassigned between the read and the write.
            return Err(CalculationError::NotFound(id));
        }
        debug!(owner = %owner, id = %id, kind = %draft.kind(), "Calculation updated");

        Ok(draft.into_record(id).view())
    }

    async fn delete(&self, owner: UserId, id: CalculationId) -> Result<(), CalculationError> {
        if !self.store.delete(id, owner).await? {
            return Err(CalculationError::NotFound(id));
        }
        debug!(owner = %owner, id = %id, "Calculation deleted");
        Ok(())
    }
}
