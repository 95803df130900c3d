/// Users API routes
use crate::{
    error::{Result, ServerError},
    extract::ValidatedJson,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use roster_core::{CreateUser, UpdateUser, User};
use serde::Deserialize;
use validator::{Validate, ValidationError};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = "validate_name"))]
    pub name: String,
}

/// Partial rendition of the create schema: every field optional, the
/// per-field rules unchanged and applied only when the field is present.
/// An empty object is a valid no-op update.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_name"))]
    pub name: Option<String>,
}

// Name length rule: [1, 100], with distinct messages for the two bounds.
fn validate_name(name: &str) -> std::result::Result<(), ValidationError> {
    if name.is_empty() {
        let mut error = ValidationError::new("length");
        error.message = Some("Name is required".into());
        return Err(error);
    }
    if name.chars().count() > 100 {
        let mut error = ValidationError::new("length");
        error.message = Some("Name too long".into());
        return Err(error);
    }
    Ok(())
}

impl From<CreateUserRequest> for CreateUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            email: req.email,
            name: req.name,
        }
    }
}

impl From<UpdateUserRequest> for UpdateUser {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            email: req.email,
            name: req.name,
        }
    }
}

/// GET /api/users
/// List all users in insertion order
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store.find_all())
}

/// GET /api/users/:id
/// Get a single user by id
pub async fn get_user(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<User>> {
    let user = state
        .store
        .find_one(id)
        .ok_or_else(|| ServerError::user_not_found(id))?;

    Ok(Json(user))
}

/// POST /api/users
/// Create a new user from a validated payload
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let user = state.store.create(req.into());
    tracing::debug!("Created user {}", user.id);

    Ok((StatusCode::CREATED, Json(user)))
}

/// PATCH /api/users/:id
/// Partially update a user; only the supplied fields are replaced
pub async fn update_user(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<User>> {
    let user = state
        .store
        .update(id, req.into())
        .ok_or_else(|| ServerError::user_not_found(id))?;

    Ok(Json(user))
}

/// DELETE /api/users/:id
/// Delete a user, answering `true` on success
pub async fn delete_user(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<bool>> {
    state
        .store
        .remove(id)
        .ok_or_else(|| ServerError::user_not_found(id))?;
    tracing::debug!("Deleted user {}", id);

    Ok(Json(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_schema_accepts_a_valid_payload() {
        let req = CreateUserRequest {
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn create_schema_reports_every_violated_field() {
        let req = CreateUserRequest {
            email: "not-an-email".to_string(),
            name: String::new(),
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 2);
        assert_eq!(
            fields["email"][0].message.as_deref(),
            Some("Invalid email format")
        );
        assert_eq!(
            fields["name"][0].message.as_deref(),
            Some("Name is required")
        );
    }

    #[test]
    fn name_over_100_chars_is_too_long() {
        let req = CreateUserRequest {
            email: "alice@example.com".to_string(),
            name: "x".repeat(101),
        };

        let errors = req.validate().unwrap_err();
        assert_eq!(
            errors.field_errors()["name"][0].message.as_deref(),
            Some("Name too long")
        );
    }

    #[test]
    fn name_of_exactly_100_chars_is_valid() {
        let req = CreateUserRequest {
            email: "alice@example.com".to_string(),
            name: "x".repeat(100),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn update_schema_accepts_an_empty_payload() {
        let req = UpdateUserRequest::default();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn update_schema_applies_rules_to_present_fields() {
        let req = UpdateUserRequest {
            email: Some("not-an-email".to_string()),
            name: None,
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 1);
        assert_eq!(
            fields["email"][0].message.as_deref(),
            Some("Invalid email format")
        );
    }
}
