//! Conversions from crate and extractor errors into [`ApiError`].

use crate::domain::ApiError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use cd_01_calculations::{CalculationError, ComputeError};
use cd_02_accounts::AccountError;

impl From<CalculationError> for ApiError {
    fn from(e: CalculationError) -> Self {
        match e {
            CalculationError::Validation(v) => ApiError::bad_request(v.to_string()).with_field(v.field()),
            CalculationError::NotFound(_) => ApiError::not_found(e.to_string()),
            CalculationError::Store(store) => ApiError::internal(store),
        }
    }
}

impl From<AccountError> for ApiError {
    fn from(e: AccountError) -> Self {
        match e {
            AccountError::InvalidField { field, .. } => {
                ApiError::bad_request(e.to_string()).with_field(field)
            }
            AccountError::Conflict { field } => ApiError::conflict(e.to_string()).with_field(field),
            AccountError::InvalidCredentials | AccountError::InvalidToken(_) => {
                ApiError::unauthorized(e.to_string())
            }
            AccountError::CorruptCredential | AccountError::Store(_) => ApiError::internal(e),
        }
    }
}

/// Two-number operations reject a zero divisor or an overflow with 400.
impl From<ComputeError> for ApiError {
    fn from(e: ComputeError) -> Self {
        ApiError::bad_request(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };
        ApiError::new(status, rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::bad_request(rejection.body_text()).with_field("id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cd_01_calculations::ValidationError;
    use shared_types::{CalculationId, StoreError, TokenError};

    #[test]
    fn test_calculation_errors() {
        let err: ApiError = CalculationError::Validation(ValidationError::TooFewOperands {
            count: 1,
        })
        .into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.field, Some("inputs"));

        let err: ApiError = CalculationError::Validation(ValidationError::MalformedKind {
            kind: "power".into(),
        })
        .into();
        assert_eq!(err.field, Some("type"));

        let err: ApiError = CalculationError::NotFound(CalculationId(5)).into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Calculation 5 not found");

        let err: ApiError = CalculationError::Store(StoreError::Unavailable("db".into())).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("db"));
    }

    #[test]
    fn test_account_errors() {
        let err: ApiError = AccountError::Conflict { field: "username" }.into();
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.field, Some("username"));

        let err: ApiError = AccountError::InvalidToken(TokenError::Malformed).into();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);

        let err: ApiError = AccountError::InvalidField {
            field: "email",
            reason: "is not a valid email address".into(),
        }
        .into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.field, Some("email"));
    }

    #[test]
    fn test_compute_error_is_bad_request() {
        let err: ApiError = ComputeError::DivisionByZero { position: 1 }.into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("Division by zero"));
    }
}
