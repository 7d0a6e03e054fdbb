//! Calculation records.
//!
//! ## Lifecycle
//!
//! ```text
//! request ──validate──→ CalculationDraft ──store.insert──→ Calculation
//!                                                              │
//!                          CalculationPatch ──validate_update──┘ (re-checks merged state)
//! ```
//!
//! Results are never stored. `compute()` reduces the operands every time it
//! is called.

use super::errors::ComputeError;
use super::kind::CalculationKind;
use shared_types::{CalculationId, UserId};

/// A calculation that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationDraft {
    owner: UserId,
    kind: CalculationKind,
    operands: Vec<f64>,
}

impl CalculationDraft {
    /// Builds a draft for `kind`.
    ///
    /// No rules are checked here. Request handling goes through
    /// [`CalculationValidator`](super::validation::CalculationValidator),
    /// which is the only caller in the service path.
    pub fn create(kind: CalculationKind, owner: UserId, operands: Vec<f64>) -> Self {
        Self {
            owner,
            kind,
            operands,
        }
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn kind(&self) -> CalculationKind {
        self.kind
    }

    pub fn operands(&self) -> &[f64] {
        &self.operands
    }

    /// Reduces the operands according to the kind.
    pub fn compute(&self) -> Result<f64, ComputeError> {
        self.kind.reduce(&self.operands)
    }

    /// Attaches a store-assigned id.
    pub fn into_record(self, id: CalculationId) -> Calculation {
        Calculation {
            id,
            owner: self.owner,
            kind: self.kind,
            operands: self.operands,
        }
    }
}

/// A persisted calculation record.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    id: CalculationId,
    owner: UserId,
    kind: CalculationKind,
    operands: Vec<f64>,
}

impl Calculation {
    pub fn id(&self) -> CalculationId {
        self.id
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn kind(&self) -> CalculationKind {
        self.kind
    }

    pub fn operands(&self) -> &[f64] {
        &self.operands
    }

    /// Reduces the operands according to the kind.
    pub fn compute(&self) -> Result<f64, ComputeError> {
        self.kind.reduce(&self.operands)
    }

    /// Pairs the record with a freshly computed result.
    pub fn view(&self) -> CalculationView {
        CalculationView {
            id: self.id,
            owner: self.owner,
            kind: self.kind,
            operands: self.operands.clone(),
            result: self.compute(),
        }
    }
}

/// What callers see for one record: its fields plus the current result.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationView {
    pub id: CalculationId,
    pub owner: UserId,
    pub kind: CalculationKind,
    pub operands: Vec<f64>,
    pub result: Result<f64, ComputeError>,
}
