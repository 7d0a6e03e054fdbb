//! # Calculations
//!
//! Calculation records: an operation kind plus an ordered list of operands,
//! with a result computed on demand.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | At least two operands | `domain/validation.rs` - `check()` |
//! | INVARIANT-2 | No zero divisor at index ≥ 1 for division/modulus | `domain/validation.rs` - `check()`, `domain/kind.rs` - `reduce()` |
//! | INVARIANT-3 | Unknown kinds are rejected, never defaulted | `domain/validation.rs` - `parse_kind()` |
//! | INVARIANT-4 | Updates re-check the merged record | `domain/validation.rs` - `validate_update()` |
//! | INVARIANT-5 | Records are visible only to their owner | `service.rs` - `find_owned()` |
//!
//! ## Reduction Semantics
//!
//! | Kind | Result |
//! |------|--------|
//! | `addition` | sum |
//! | `subtraction` | `x0 - x1 - ... - xn` |
//! | `multiplication` | product |
//! | `division` | `x0 / x1 / ... / xn`, fails at the first zero divisor |
//! | `modulus` | `x0 % x1 % ... % xn`, fails at the first zero divisor |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/memory.rs - InMemoryCalculationStore                  │
//! │  service.rs         - CalculationService                        │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - CalculationApi trait                       │
//! │  ports/outbound.rs - CalculationStore, OwnerDirectory traits    │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/kind.rs       - CalculationKind, reduce()               │
//! │  domain/entities.rs   - CalculationDraft, Calculation, View     │
//! │  domain/validation.rs - CalculationValidator                    │
//! │  domain/operations.rs - two-number add/subtract/multiply/divide │
//! │  domain/errors.rs     - Validation/Compute/CalculationError     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
pub use service::CalculationService;
