//! # Accounts
//!
//! User registration, login and bearer-token resolution.
//!
//! ## Security Properties
//!
//! | Property | Enforcement Location |
//! |----------|---------------------|
//! | Passwords stored only as salted HMAC-SHA256 | `domain/credentials.rs` |
//! | Username and email unique (email case-insensitive) | `adapters/memory.rs`, `domain/rules.rs` |
//! | Login failures do not reveal which check failed | `service.rs` - `login()` |
//! | Tokens signed and time-bounded | `shared_types::security::TokenSigner` |
//!
//! ## Module Structure
//!
//! ```text
//! service.rs          AccountService (implements AccountApi)
//!     │
//!     ├── ports/outbound.rs   UserStore, TimeSource
//!     │       └── adapters/memory.rs  InMemoryUserStore
//!     │
//!     └── domain/
//!             rules.rs        registration checks
//!             credentials.rs  password hashing
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
pub use service::{AccountService, DEFAULT_TOKEN_TTL};
