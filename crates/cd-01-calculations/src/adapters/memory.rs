//! In-memory calculation store.
//!
//! Records live in a `BTreeMap` behind a `parking_lot::RwLock`; each port
//! call takes the lock once, which makes every single-row operation atomic.
//! Ids start at 1 and are never reused.

use crate::domain::{Calculation, CalculationDraft};
use crate::ports::CalculationStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{CalculationId, StoreError, UserId};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct Inner {
    last_id: u64,
    records: BTreeMap<CalculationId, Calculation>,
}

/// Process-local `CalculationStore`.
#[derive(Debug, Default)]
pub struct InMemoryCalculationStore {
    inner: RwLock<Inner>,
}

impl InMemoryCalculationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CalculationStore for InMemoryCalculationStore {
    async fn insert(&self, draft: CalculationDraft) -> Result<CalculationId, StoreError> {
        let mut inner = self.inner.write();
        let id = inner
            .last_id
            .checked_add(1)
            .map(CalculationId)
            .ok_or(StoreError::IdsExhausted)?;
        inner.last_id = id.get();
        inner.records.insert(id, draft.into_record(id));
        Ok(id)
    }

    async fn update(
        &self,
        id: CalculationId,
        owner: UserId,
        draft: CalculationDraft,
    ) -> Result<bool, StoreError> {
        let mut inner = self.inner.write();
        match inner.records.get_mut(&id) {
            Some(record) if record.owner() == owner => {
                *record = draft.into_record(id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, id: CalculationId, owner: UserId) -> Result<bool, StoreError> {
        let mut inner = self.inner.write();
        if inner.records.get(&id).is_some_and(|r| r.owner() == owner) {
            inner.records.remove(&id);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn find(&self, id: CalculationId) -> Result<Option<Calculation>, StoreError> {
        Ok(self.inner.read().records.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Calculation>, StoreError> {
        Ok(self
            .inner
            .read()
            .records
            .values()
            .filter(|record| record.owner() == owner)
            .cloned()
            .collect())
    }
}
