//! Route table and shared handler state.

use crate::domain::config::GatewayConfig;
use crate::domain::ApiError;
use crate::handlers::{self, arithmetic, calculations, users};
use crate::middleware::{create_cors_layer, TracingLayer};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use cd_01_calculations::CalculationApi;
use cd_02_accounts::AccountApi;
use std::sync::Arc;
use tower::ServiceBuilder;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountApi>,
    pub calculations: Arc<dyn CalculationApi>,
}

/// Builds the full HTTP surface.
///
/// | Route | Auth |
/// |-------|------|
/// | `GET /health` | - |
/// | `POST /users/register`, `POST /users/login` | - |
/// | `GET, POST /calculations` | bearer |
/// | `GET, PUT, DELETE /calculations/:id` | bearer |
/// | `POST /add`, `/subtract`, `/multiply`, `/divide` | - |
pub fn build_router(state: AppState, config: &GatewayConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(create_cors_layer(&config.cors))
        .layer(TracingLayer::new());

    Router::new()
        .route("/health", get(handlers::health))
        .route("/users/register", post(users::register))
        .route("/users/login", post(users::login))
        .route(
            "/calculations",
            get(calculations::list).post(calculations::create),
        )
        .route(
            "/calculations/:id",
            get(calculations::read)
                .put(calculations::update)
                .delete(calculations::delete),
        )
        .route("/add", post(arithmetic::add))
        .route("/subtract", post(arithmetic::subtract))
        .route("/multiply", post(arithmetic::multiply))
        .route("/divide", post(arithmetic::divide))
        .fallback(|| async { ApiError::not_found("Not found") })
        .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
        .layer(middleware)
        .with_state(state)
}
