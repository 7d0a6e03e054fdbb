//! CORS middleware.
//!
//! Wrapper around tower-http CORS with gateway configuration.

use crate::domain::config::CorsConfig;
use axum::http::{HeaderName, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Create CORS layer from gateway config
pub fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    if !config.enabled {
        // No CORS headers at all; browsers fall back to same-origin.
        return CorsLayer::new();
    }

    let wildcard = |list: &[String]| list.iter().any(|s| s == "*");

    let mut cors = CorsLayer::new();

    if wildcard(&config.allowed_origins) {
        // A wildcard origin cannot be combined with credentials, so mirror
        // the request origin instead.
        cors = if config.allow_credentials {
            cors.allow_origin(AllowOrigin::mirror_request())
        } else {
            cors.allow_origin(Any)
        };
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if wildcard(&config.allowed_headers) && !config.allow_credentials {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors = cors.max_age(Duration::from_secs(config.max_age));

    if config.allow_credentials {
        cors = cors.allow_credentials(true);
    }

    cors
}
