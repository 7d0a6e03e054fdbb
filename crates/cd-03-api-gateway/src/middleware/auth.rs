//! Caller authentication.
//!
//! Handlers that need an identity take an [`AuthenticatedUser`] argument.
//! The bearer token is read from the `Authorization` header, falling back to
//! an `access_token` cookie, and resolved through the account service.

use crate::domain::ApiError;
use crate::router::AppState;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderMap};
use cd_02_accounts::{AccountError, User};
use shared_types::UserId;
use tracing::{debug, warn};

pub const TOKEN_COOKIE: &str = "access_token";

const CREDENTIALS_REJECTED: &str = "Could not validate credentials";

/// The user a request was authenticated as.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl AuthenticatedUser {
    pub fn id(&self) -> UserId {
        self.0.id
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(token) = extract_token(&parts.headers) else {
            debug!("Request without credentials");
            return Err(ApiError::unauthorized(CREDENTIALS_REJECTED));
        };

        match state.accounts.authenticate(token).await {
            Ok(user) => Ok(Self(user)),
            Err(AccountError::InvalidToken(reason)) => {
                warn!(%reason, "Rejected access token");
                Err(ApiError::unauthorized(CREDENTIALS_REJECTED))
            }
            Err(AccountError::InvalidCredentials) => {
                warn!("Access token names an unknown or inactive user");
                Err(ApiError::unauthorized(CREDENTIALS_REJECTED))
            }
            Err(other) => Err(other.into()),
        }
    }
}

/// `Authorization: Bearer <token>` first, then the `access_token` cookie.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    bearer_token(headers).or_else(|| cookie_token(headers))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

fn cookie_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == TOKEN_COOKIE && !value.is_empty())
        .map(|(_, value)| value)
}
