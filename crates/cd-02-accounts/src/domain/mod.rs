//! Account domain: entities, registration rules and credential hashing.

pub mod credentials;
pub mod entities;
pub mod errors;
pub mod rules;

pub use entities::*;
pub use errors::*;
pub use rules::{check_registration, CheckedRegistration};
