//! Gateway domain: configuration, errors and wire types.

pub mod config;
pub mod error;
pub mod types;

pub use config::{ConfigError, GatewayConfig};
pub use error::{ApiError, ApiResult, GatewayError};
pub use types::*;
