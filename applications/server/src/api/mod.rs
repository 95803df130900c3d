/// API route modules
pub mod health;
pub mod users;

use crate::state::AppState;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};

/// Build the full API router, nested under `/<prefix>`
///
/// Used by both the binary and the integration tests so the route table
/// exists in exactly one place.
pub fn router(state: AppState, prefix: &str) -> Router {
    let routes = Router::new()
        .route("/health", get(health::health))
        // Users
        .route("/users", get(users::list_users))
        .route("/users", post(users::create_user))
        .route("/users/:id", get(users::get_user))
        .route("/users/:id", patch(users::update_user))
        .route("/users/:id", delete(users::delete_user));

    Router::new()
        .nest(&format!("/{prefix}"), routes)
        .with_state(state)
}
