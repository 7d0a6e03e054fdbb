//! # API Gateway
//!
//! REST interface over the account and calculation services.
//!
//! ## Request Path
//!
//! ```text
//! Client ──HTTP──→ Cors → Tracing → BodyLimit → Router
//!                                                 │
//!                      ┌──────────────────────────┼──────────────────┐
//!                      ↓                          ↓                  ↓
//!               handlers/users.rs      handlers/calculations.rs   handlers/arithmetic.rs
//!                      │               (AuthenticatedUser)           │
//!                      ↓                          ↓                  ↓
//!               AccountApi               CalculationApi     domain::operations
//! ```
//!
//! ## Error Mapping
//!
//! | Failure | Status |
//! |---------|--------|
//! | validation, malformed JSON, zero divisor on `/divide` | 400 |
//! | missing or rejected credentials | 401 |
//! | record absent or owned by someone else | 404 |
//! | username or email taken | 409 |
//! | store failure | 500 (`Internal server error`, detail logged) |

pub mod adapters;
pub mod domain;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod service;

pub use domain::{ApiError, ApiResult, ConfigError, GatewayConfig, GatewayError};
pub use router::{build_router, AppState};
pub use service::GatewayService;
