//! HTTP handlers.

pub mod arithmetic;
pub mod calculations;
pub mod extract;
pub mod users;

use crate::domain::HealthResponse;
use axum::Json;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
