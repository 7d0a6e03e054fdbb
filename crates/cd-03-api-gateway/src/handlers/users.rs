//! `/users/register` and `/users/login`.

use super::extract::ApiJson;
use crate::domain::{ApiResult, LoginRequest, RegisterRequest, TokenResponse, UserResponse};
use crate::router::AppState;
use axum::extract::State;
use axum::Json;

pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.accounts.register(req.into()).await?;
    Ok(Json(UserResponse::from(&user)))
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let session = state.accounts.login(&req.username, &req.password).await?;
    Ok(Json(session.into()))
}
