//! Stateless two-number operations.
//!
//! These back the single-operation endpoints and reduce `[a, b]` with the
//! same code as stored calculations, so a zero divisor fails identically.

use super::errors::ComputeError;
use super::kind::CalculationKind;

pub fn add(a: f64, b: f64) -> Result<f64, ComputeError> {
    CalculationKind::Addition.reduce(&[a, b])
}

pub fn subtract(a: f64, b: f64) -> Result<f64, ComputeError> {
    CalculationKind::Subtraction.reduce(&[a, b])
}

pub fn multiply(a: f64, b: f64) -> Result<f64, ComputeError> {
    CalculationKind::Multiplication.reduce(&[a, b])
}

/// Divides `a` by `b`.
///
/// # Errors
///
/// `DivisionByZero { position: 1 }` when `b` is zero.
pub fn divide(a: f64, b: f64) -> Result<f64, ComputeError> {
    CalculationKind::Division.reduce(&[a, b])
}
