//! # Domain Layer - Calculations
//!
//! Pure logic, no I/O.
//!
//! ## Components
//!
//! - `kind`: `CalculationKind` and its reduction semantics
//! - `entities`: `CalculationDraft`, `Calculation`, `CalculationView`
//! - `validation`: `CalculationValidator`, requests and patches
//! - `operations`: stateless two-number operations
//! - `errors`: `ValidationError`, `ComputeError`, `CalculationError`

pub mod entities;
pub mod errors;
pub mod kind;
pub mod operations;
pub mod validation;

pub use entities::*;
pub use errors::*;
pub use kind::*;
pub use validation::*;
