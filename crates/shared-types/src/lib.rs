//! # Shared Types Crate
//!
//! Types that cross crate boundaries in the Calcdesk workspace.
//!
//! ## Design Principles
//!
//! - **One identifier type per entity**: `UserId` and `CalculationId` are
//!   integer newtypes; owners are never carried as strings.
//! - **Store-agnostic errors**: `StoreError` is what every persistence port
//!   returns, whatever backs it.
//! - **Centralized token signing**: access tokens are minted and checked only
//!   through [`security::TokenSigner`].

pub mod entities;
pub mod errors;
pub mod security;

pub use entities::*;
pub use errors::*;
pub use security::*;
