//! Calculation error types.
//!
//! Three layers, matching where a failure is detected:
//! - [`ValidationError`]: input rejected before any record is built
//! - [`ComputeError`]: a record's operands could not be reduced
//! - [`CalculationError`]: service-level outcome (validation, lookup, store)

use shared_types::{CalculationId, StoreError, UserId};
use thiserror::Error;

/// Failure while reducing operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComputeError {
    /// A divisor at `position` (zero-based index into the operands) is zero.
    #[error("Division by zero: input at position {position} is zero")]
    DivisionByZero { position: usize },

    /// There is nothing to reduce.
    #[error("No inputs to compute")]
    NoOperands,

    /// The reduction overflowed to infinity or produced `NaN`.
    #[error("Result is not a finite number")]
    NonFiniteResult,
}

/// A proposed calculation violates a rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The requested kind is not a recognized operation.
    #[error(
        "Unsupported calculation type '{kind}'; expected one of addition, subtraction, \
         multiplication, division, modulus"
    )]
    MalformedKind { kind: String },

    /// Fewer than two operands supplied.
    #[error("At least two inputs are required, got {count}")]
    TooFewOperands { count: usize },

    /// More operands than the configured maximum.
    #[error("At most {max} inputs are allowed, got {count}")]
    TooManyOperands { count: usize, max: usize },

    /// An operand is `NaN` or infinite.
    #[error("Input at position {position} is not a finite number")]
    NonFiniteOperand { position: usize },

    /// A divisor at `position` is zero for a dividing kind.
    #[error("Division by zero: input at position {position} is zero")]
    DivisionByZero { position: usize },

    /// Reassignment target is not a known user.
    #[error("Unknown user {owner}")]
    UnknownOwner { owner: UserId },
}

impl ValidationError {
    /// Name of the request field that failed, as it appears on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MalformedKind { .. } => "type",
            Self::TooFewOperands { .. }
            | Self::TooManyOperands { .. }
            | Self::NonFiniteOperand { .. }
            | Self::DivisionByZero { .. } => "inputs",
            Self::UnknownOwner { .. } => "user_id",
        }
    }
}

/// Outcome of a calculation service operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// The request was rejected by validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record with this id is visible to the caller.
    ///
    /// Absent records and records owned by someone else are reported the
    /// same way.
    #[error("Calculation {0} not found")]
    NotFound(CalculationId),

    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
