//! Roster Core
//!
//! Domain types for the Roster user resource service.
//!
//! This crate defines the `User` record exposed over HTTP together with
//! the `CreateUser`/`UpdateUser` payload types consumed by the store.
//!
//! # Example
//!
//! ```rust
//! use roster_core::{CreateUser, User};
//!
//! let user = User::new(1, CreateUser {
//!     email: "alice@example.com".to_string(),
//!     name: "Alice".to_string(),
//! });
//! assert_eq!(user.id, 1);
//! ```

#![forbid(unsafe_code)]

pub mod types;

// Re-export commonly used types
pub use types::{CreateUser, UpdateUser, User};
