//! Adapters for the Calculations crate.
//!
//! Infrastructure implementations of the outbound ports.

pub mod memory;

pub use memory::InMemoryCalculationStore;
