//! Stateless two-number endpoints: `/add`, `/subtract`, `/multiply`, `/divide`.

use super::extract::ApiJson;
use crate::domain::{ApiResult, OperationRequest, OperationResponse};
use axum::Json;
use cd_01_calculations::domain::operations;
use cd_01_calculations::ComputeError;
use tracing::warn;

fn respond(
    name: &'static str,
    op: fn(f64, f64) -> Result<f64, ComputeError>,
    req: OperationRequest,
) -> ApiResult<Json<OperationResponse>> {
    let result = op(req.a, req.b).inspect_err(|e| warn!(operation = name, "Operation failed: {e}"))?;
    Ok(Json(OperationResponse { result }))
}

pub async fn add(ApiJson(req): ApiJson<OperationRequest>) -> ApiResult<Json<OperationResponse>> {
    respond("add", operations::add, req)
}

pub async fn subtract(
    ApiJson(req): ApiJson<OperationRequest>,
) -> ApiResult<Json<OperationResponse>> {
    respond("subtract", operations::subtract, req)
}

pub async fn multiply(
    ApiJson(req): ApiJson<OperationRequest>,
) -> ApiResult<Json<OperationResponse>> {
    respond("multiply", operations::multiply, req)
}

pub async fn divide(ApiJson(req): ApiJson<OperationRequest>) -> ApiResult<Json<OperationResponse>> {
    respond("divide", operations::divide, req)
}
