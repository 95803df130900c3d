/// User domain types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User record exposed over the HTTP API
///
/// Serialized in camelCase with RFC 3339 timestamps, matching the wire
/// contract (`{id, email, name, createdAt, updatedAt}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier, assigned by the store, immutable
    pub id: i64,

    /// Email address
    pub email: String,

    /// Display name
    pub name: String,

    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp, refreshed on every update
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with both timestamps set to now
    pub fn new(id: i64, payload: CreateUser) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: payload.email,
            name: payload.name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the supplied fields into this record and refresh `updated_at`
    ///
    /// Fields absent from the payload keep their current value; `id` and
    /// `created_at` are never touched.
    pub fn apply(&mut self, payload: UpdateUser) {
        if let Some(email) = payload.email {
            self.email = email;
        }
        if let Some(name) = payload.name {
            self.name = name;
        }
        self.updated_at = Utc::now();
    }
}

/// Validated payload for creating a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address
    pub email: String,

    /// Display name
    pub name: String,
}

/// Validated payload for partially updating a user
///
/// Every field of [`CreateUser`] made optional; an empty payload is a
/// valid no-op update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New email address, if supplied
    pub email: Option<String>,

    /// New display name, if supplied
    pub name: Option<String>,
}
