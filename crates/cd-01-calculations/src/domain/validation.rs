//! Calculation validation.
//!
//! Every create and update passes through [`CalculationValidator`] before a
//! draft exists. Rules run in a fixed order and stop at the first failure:
//!
//! | # | Rule | Error |
//! |---|------|-------|
//! | 1 | kind is recognized | `MalformedKind` |
//! | 2 | at least two operands | `TooFewOperands` |
//! | 3 | no more than `max_operands` | `TooManyOperands` |
//! | 4 | every operand is finite | `NonFiniteOperand` |
//! | 5 | dividing kinds: no zero at index ≥ 1 | `DivisionByZero` |
//!
//! Updates merge the supplied fields over the stored record first and then
//! run the whole table, so a kind-only change is checked against the stored
//! operands.

use super::entities::{Calculation, CalculationDraft};
use super::errors::ValidationError;
use super::kind::CalculationKind;
use shared_types::UserId;

/// Minimum number of operands in any calculation.
pub const MIN_OPERANDS: usize = 2;

/// Default upper bound on operands per calculation.
pub const DEFAULT_MAX_OPERANDS: usize = 1_000;

/// Limits applied by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorLimits {
    pub max_operands: usize,
}

impl Default for ValidatorLimits {
    fn default() -> Self {
        Self {
            max_operands: DEFAULT_MAX_OPERANDS,
        }
    }
}

/// A create request as parsed from the caller's payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCalculationRequest {
    /// Requested kind, not yet checked.
    pub kind: String,
    pub operands: Vec<f64>,
}

/// A partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculationPatch {
    pub kind: Option<String>,
    pub operands: Option<Vec<f64>>,
    pub owner: Option<UserId>,
}

impl CalculationPatch {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.operands.is_none() && self.owner.is_none()
    }
}

/// Gatekeeper for calculation creation and update.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculationValidator {
    limits: ValidatorLimits,
}

impl CalculationValidator {
    pub fn new(limits: ValidatorLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> ValidatorLimits {
        self.limits
    }

    /// Checks a create request and builds the draft.
    pub fn validate_create(
        &self,
        owner: UserId,
        request: NewCalculationRequest,
    ) -> Result<CalculationDraft, ValidationError> {
        let kind = parse_kind(&request.kind)?;
        self.check(kind, &request.operands)?;
        Ok(CalculationDraft::create(kind, owner, request.operands))
    }

    /// Merges `patch` over `existing` and checks the merged state.
    pub fn validate_update(
        &self,
        existing: &Calculation,
        patch: CalculationPatch,
    ) -> Result<CalculationDraft, ValidationError> {
        let kind = match patch.kind.as_deref() {
            Some(kind) => parse_kind(kind)?,
            None => existing.kind(),
        };
        let operands = patch
            .operands
            .unwrap_or_else(|| existing.operands().to_vec());
        let owner = patch.owner.unwrap_or(existing.owner());

        self.check(kind, &operands)?;
        Ok(CalculationDraft::create(kind, owner, operands))
    }

    fn check(&self, kind: CalculationKind, operands: &[f64]) -> Result<(), ValidationError> {
        let count = operands.len();
        if count < MIN_OPERANDS {
            return Err(ValidationError::TooFewOperands { count });
        }
        if count > self.limits.max_operands {
            return Err(ValidationError::TooManyOperands {
                count,
                max: self.limits.max_operands,
            });
        }
        if let Some(position) = operands.iter().position(|x| !x.is_finite()) {
            return Err(ValidationError::NonFiniteOperand { position });
        }
        if kind.divides() {
            if let Some(position) = operands.iter().skip(1).position(|&x| x == 0.0) {
                return Err(ValidationError::DivisionByZero {
                    position: position + 1,
                });
            }
        }
        Ok(())
    }
}

fn parse_kind(kind: &str) -> Result<CalculationKind, ValidationError> {
    kind.parse().map_err(|_| ValidationError::MalformedKind {
        kind: kind.to_string(),
    })
}
