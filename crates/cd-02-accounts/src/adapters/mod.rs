//! Adapters for the Accounts crate.

pub mod memory;

pub use memory::InMemoryUserStore;
