//! Wire types for the REST surface.

use cd_01_calculations::{CalculationKind, CalculationPatch, CalculationView, NewCalculationRequest};
use cd_02_accounts::{Registration, Session, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{CalculationId, UserId};

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

impl From<RegisterRequest> for Registration {
    fn from(r: RegisterRequest) -> Self {
        Registration {
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            username: r.username,
            password: r.password,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name.clone(),
            last_name: u.last_name.clone(),
            email: u.email.clone(),
            username: u.username.clone(),
            is_active: u.is_active,
            created_at: u.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

impl From<Session> for TokenResponse {
    fn from(s: Session) -> Self {
        Self {
            user: UserResponse::from(&s.user),
            access_token: s.access_token,
            token_type: "bearer".to_string(),
            expires_at: s.expires_at,
        }
    }
}

/// Body of `POST /calculations`.
///
/// A `user_id` field, if sent, is ignored: the owner is the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationCreateRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub inputs: Vec<f64>,
}

impl From<CalculationCreateRequest> for NewCalculationRequest {
    fn from(r: CalculationCreateRequest) -> Self {
        NewCalculationRequest {
            kind: r.kind,
            operands: r.inputs,
        }
    }
}

/// Body of `PUT /calculations/{id}`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculationUpdateRequest {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub inputs: Option<Vec<f64>>,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

impl From<CalculationUpdateRequest> for CalculationPatch {
    fn from(r: CalculationUpdateRequest) -> Self {
        CalculationPatch {
            kind: r.kind,
            operands: r.inputs,
            owner: r.user_id,
        }
    }
}

/// A calculation as returned to clients.
///
/// `result` is `null` and `error` is set when the stored operands cannot be
/// reduced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub id: CalculationId,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: CalculationKind,
    pub inputs: Vec<f64>,
    pub result: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<CalculationView> for CalculationResponse {
    fn from(v: CalculationView) -> Self {
        let (result, error) = match v.result {
            Ok(value) => (Some(value), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            id: v.id,
            user_id: v.owner,
            kind: v.kind,
            inputs: v.operands,
            result,
            error,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OperationRequest {
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperationResponse {
    pub result: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
