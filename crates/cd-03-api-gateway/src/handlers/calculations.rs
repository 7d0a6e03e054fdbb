//! Calculation record endpoints. Every handler is scoped to the caller.

use super::extract::{ApiJson, ApiPath};
use crate::domain::{
    ApiResult, CalculationCreateRequest, CalculationResponse, CalculationUpdateRequest,
    DeleteResponse,
};
use crate::middleware::AuthenticatedUser;
use crate::router::AppState;
use axum::extract::State;
use axum::Json;
use shared_types::CalculationId;

pub async fn list(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
) -> ApiResult<Json<Vec<CalculationResponse>>> {
    let views = state.calculations.list(caller.id()).await?;
    Ok(Json(views.into_iter().map(CalculationResponse::from).collect()))
}

pub async fn create(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ApiJson(req): ApiJson<CalculationCreateRequest>,
) -> ApiResult<Json<CalculationResponse>> {
    let view = state.calculations.create(caller.id(), req.into()).await?;
    Ok(Json(view.into()))
}

pub async fn read(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ApiPath(id): ApiPath<CalculationId>,
) -> ApiResult<Json<CalculationResponse>> {
    let view = state.calculations.get(caller.id(), id).await?;
    Ok(Json(view.into()))
}

pub async fn update(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ApiPath(id): ApiPath<CalculationId>,
    ApiJson(req): ApiJson<CalculationUpdateRequest>,
) -> ApiResult<Json<CalculationResponse>> {
    let view = state
        .calculations
        .update(caller.id(), id, req.into())
        .await?;
    Ok(Json(view.into()))
}

pub async fn delete(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ApiPath(id): ApiPath<CalculationId>,
) -> ApiResult<Json<DeleteResponse>> {
    state.calculations.delete(caller.id(), id).await?;
    Ok(Json(DeleteResponse { ok: true }))
}
