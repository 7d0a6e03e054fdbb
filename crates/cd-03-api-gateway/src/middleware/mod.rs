//! Middleware stack for the gateway.
//!
//! Layer order (outermost first): Cors → Tracing → BodyLimit → Handler.
//! Authentication is an extractor (`AuthenticatedUser`) applied per handler.

pub mod auth;
pub mod cors;
pub mod tracing;

pub use self::auth::{extract_token, AuthenticatedUser};
pub use self::cors::create_cors_layer;
pub use self::tracing::TracingLayer;
