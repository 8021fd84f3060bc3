use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::domain::errors::{FootballError, ValidationErrors};

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub errors: Option<ValidationErrors>,
    pub error_id: Option<String>,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: None,
            error_id: None,
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "error": self.message
        });
        if let Some(errors) = self.errors {
            body["errors"] = json!(errors);
        }
        if let Some(error_id) = self.error_id {
            body["error_id"] = json!(error_id);
        }

        (self.status, Json(body)).into_response()
    }
}

impl From<FootballError> for ApiError {
    fn from(err: FootballError) -> Self {
        match err {
            FootballError::Validation(errors) => Self {
                errors: Some(errors),
                ..Self::bad_request("Validation failed")
            },
            FootballError::NotFound { .. } => Self::not_found(err.to_string()),
            FootballError::InvalidMarketOperation(_) | FootballError::DuplicateId { .. } => {
                Self::conflict(err.to_string())
            }
            FootballError::Other(message) => Self::internal_server_error(message),
            FootballError::Storage(detail) => {
                // detail stays in the log; clients get an id to quote
                let error_id = Uuid::new_v4().to_string();
                tracing::error!(%error_id, error = %detail, "Storage failure");
                Self {
                    error_id: Some(error_id),
                    ..Self::internal_server_error("Internal server error")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_errors_to_status_codes() {
        let cases = [
            (FootballError::Validation(ValidationErrors::new()), StatusCode::BAD_REQUEST),
            (FootballError::not_found("players", "p1"), StatusCode::NOT_FOUND),
            (FootballError::invalid_market_operation("no"), StatusCode::CONFLICT),
            (
                FootballError::DuplicateId {
                    collection: "teams",
                    id: "t1".to_string(),
                },
                StatusCode::CONFLICT,
            ),
            (FootballError::Other("boom".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
            (FootballError::Storage("disk".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn storage_detail_is_hidden() {
        let api_error = ApiError::from(FootballError::Storage("no such table: players".to_string()));

        assert_eq!(api_error.message, "Internal server error");
        assert!(api_error.error_id.is_some());
    }

    #[test]
    fn validation_keeps_field_messages() {
        let mut errors = ValidationErrors::new();
        errors.insert("age".to_string(), vec!["'age' must be greater than 0.".to_string()]);

        let api_error = ApiError::from(FootballError::Validation(errors));

        assert_eq!(api_error.errors.unwrap()["age"].len(), 1);
    }
}
