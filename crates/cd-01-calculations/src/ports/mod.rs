//! Ports layer for the Calculations crate.
//!
//! - Inbound (Driving): `CalculationApi`, the operations callers invoke
//! - Outbound (Driven): `CalculationStore` and `OwnerDirectory`

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
