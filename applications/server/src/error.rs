/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// One violated rule in a rejected payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    NotFound(String),

    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Not-found condition for a user id, with the exact wire wording
    pub fn user_not_found(id: i64) -> Self {
        Self::NotFound(format!("User with ID {id} not found"))
    }
}

impl From<validator::ValidationErrors> for ServerError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Every violated field is reported, not just the first. Sorted by
        // field name so the list is deterministic.
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| FieldViolation {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string),
                })
            })
            .collect();
        violations.sort_by(|a, b| a.field.cmp(&b.field));

        Self::Validation(violations)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": message })),
            )
                .into_response(),
            ServerError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": "Validation failed",
                    "errors": violations,
                })),
            )
                .into_response(),
            ServerError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": message })),
            )
                .into_response(),
            ServerError::Config(ref message) => {
                tracing::error!("Config error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Configuration error" })),
                )
                    .into_response()
            }
            ServerError::Io(ref error) => {
                tracing::error!("IO error: {:?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "IO error" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_id() {
        let err = ServerError::user_not_found(999);
        assert_eq!(err.to_string(), "User with ID 999 not found");
    }

    #[test]
    fn validation_errors_flatten_to_field_violations() {
        let mut errors = validator::ValidationErrors::new();
        let mut invalid = validator::ValidationError::new("email");
        invalid.message = Some("Invalid email format".into());
        errors.add("email", invalid);

        let err = ServerError::from(errors);
        match err {
            ServerError::Validation(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "email");
                assert_eq!(violations[0].message, "Invalid email format");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
