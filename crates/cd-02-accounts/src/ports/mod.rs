//! Ports for the Accounts crate.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
