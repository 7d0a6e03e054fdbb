//! Operation kinds and their reduction semantics.
//!
//! The set of kinds is closed. Every kind reduces an operand slice with a
//! single `match`; there is no fallback kind that "computes nothing".

use super::errors::ComputeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Arithmetic operation a calculation record applies over its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationKind {
    /// Sum of all operands.
    Addition,
    /// Left fold with `-` starting from the first operand.
    Subtraction,
    /// Product of all operands.
    Multiplication,
    /// Left fold with `/`; fails on the first zero divisor.
    Division,
    /// Left fold with `%` (remainder takes the sign of the dividend);
    /// fails on the first zero divisor.
    Modulus,
}

impl CalculationKind {
    /// Every recognized kind, in wire-name order.
    pub const ALL: [CalculationKind; 5] = [
        Self::Addition,
        Self::Subtraction,
        Self::Multiplication,
        Self::Division,
        Self::Modulus,
    ];

    /// Wire name used in requests and responses.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
            Self::Multiplication => "multiplication",
            Self::Division => "division",
            Self::Modulus => "modulus",
        }
    }

    /// Whether operands after the first are used as divisors.
    pub const fn divides(self) -> bool {
        matches!(self, Self::Division | Self::Modulus)
    }

    /// Reduces `operands` according to this kind.
    ///
    /// # Errors
    ///
    /// - `NoOperands` for an empty slice
    /// - `DivisionByZero` at the first zero divisor for dividing kinds; the
    ///   fold stops there
    /// - `NonFiniteResult` when finite operands still reduce to `inf` or
    ///   `NaN` (overflow, subnormal divisors)
    pub fn reduce(self, operands: &[f64]) -> Result<f64, ComputeError> {
        let (&first, rest) = operands.split_first().ok_or(ComputeError::NoOperands)?;

        let value = match self {
            Self::Addition => operands.iter().sum(),
            Self::Subtraction => rest.iter().fold(first, |acc, x| acc - x),
            Self::Multiplication => operands.iter().product(),
            Self::Division => fold_divisors(first, rest, |acc, x| acc / x)?,
            Self::Modulus => fold_divisors(first, rest, |acc, x| acc % x)?,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ComputeError::NonFiniteResult)
        }
    }
}

fn fold_divisors(
    first: f64,
    divisors: &[f64],
    op: impl Fn(f64, f64) -> f64,
) -> Result<f64, ComputeError> {
    divisors
        .iter()
        .enumerate()
        .try_fold(first, |acc, (index, &divisor)| {
            if divisor == 0.0 {
                Err(ComputeError::DivisionByZero {
                    position: index + 1,
                })
            } else {
                Ok(op(acc, divisor))
            }
        })
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no recognized kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown calculation kind '{0}'")]
pub struct UnknownKind(pub String);

impl FromStr for CalculationKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
