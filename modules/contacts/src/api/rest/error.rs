use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::error::DomainError;

/// Error envelope as rendered on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Always "error"
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// HTTP-facing error for the contacts routes.
#[derive(Debug)]
pub enum ApiError {
    /// 400 with the collected rule violations.
    Validation(Vec<String>),
    /// 400, single message.
    DuplicateEmail,
    /// 500 with an endpoint-specific public message; the cause stays in the
    /// log, never in the response.
    Internal(&'static str),
}

impl ApiError {
    /// Map a domain error, using `internal_msg` as the public text for
    /// infrastructure failures.
    pub fn from_domain(error: DomainError, internal_msg: &'static str) -> Self {
        match error {
            DomainError::Validation { errors } => Self::Validation(errors),
            DomainError::DuplicateEmail => Self::DuplicateEmail,
            DomainError::Storage { .. } => Self::Internal(internal_msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                Some(errors),
            ),
            ApiError::DuplicateEmail => (
                StatusCode::BAD_REQUEST,
                "A contact with this email already exists".to_string(),
                None,
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.to_string(), None),
        };

        let body = ErrorBody {
            status: "error".to_string(),
            message,
            errors,
        };
        (status, Json(body)).into_response()
    }
}
