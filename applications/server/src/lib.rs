//! Roster Server Library
//!
//! Minimal HTTP resource API over the in-memory user store.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{FieldViolation, Result, ServerError};
pub use extract::ValidatedJson;
pub use state::AppState;
