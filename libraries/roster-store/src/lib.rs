//! Roster Storage
//!
//! In-memory user store for the Roster service.
//!
//! The store is the sole owner of the user sequence: every mutation goes
//! through it, ids are assigned by it, and records live only for the
//! lifetime of the process. It is volatile by design.
//!
//! # Example
//!
//! ```rust
//! use roster_core::CreateUser;
//! use roster_store::UserStore;
//!
//! let store = UserStore::new();
//! let user = store.create(CreateUser {
//!     email: "alice@example.com".to_string(),
//!     name: "Alice".to_string(),
//! });
//! assert_eq!(store.find_one(user.id), Some(user));
//! ```

#![forbid(unsafe_code)]

use roster_core::{CreateUser, UpdateUser, User};
use std::sync::RwLock;

/// In-memory collection of [`User`] records
///
/// Thread-safe: the sequence and the id counter live behind one lock, so
/// each operation is a single critical section with respect to the
/// others. Operations never block on anything but the lock itself.
///
/// Ids come from a monotonically increasing counter, never from the
/// current collection size, so an id is never reused within the store's
/// lifetime even after a delete.
#[derive(Debug)]
pub struct UserStore {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    users: Vec<User>,
    next_id: i64,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store holding the two fixed boot records (ids 1 and 2)
    pub fn seeded() -> Self {
        let store = Self::new();
        store.create(CreateUser {
            email: "john@example.com".to_string(),
            name: "John Doe".to_string(),
        });
        store.create(CreateUser {
            email: "jane@example.com".to_string(),
            name: "Jane Smith".to_string(),
        });
        store
    }

    /// Create a new user from a validated payload
    ///
    /// Assigns the next id, stamps both timestamps, appends the record at
    /// the end of the sequence and returns it.
    pub fn create(&self, payload: CreateUser) -> User {
        let mut inner = self.inner.write().expect("user store lock poisoned");
        let id = inner.next_id;
        inner.next_id += 1;

        let user = User::new(id, payload);
        inner.users.push(user.clone());
        user
    }

    /// All users in insertion order; empty when the store is empty
    pub fn find_all(&self) -> Vec<User> {
        let inner = self.inner.read().expect("user store lock poisoned");
        inner.users.clone()
    }

    /// Look up a user by id
    pub fn find_one(&self, id: i64) -> Option<User> {
        let inner = self.inner.read().expect("user store lock poisoned");
        inner.users.iter().find(|user| user.id == id).cloned()
    }

    /// Merge the supplied fields into the user with the given id
    ///
    /// Only fields present in the payload are replaced; `updated_at` is
    /// refreshed. Returns the updated record, or `None` if the id is
    /// absent.
    pub fn update(&self, id: i64, payload: UpdateUser) -> Option<User> {
        let mut inner = self.inner.write().expect("user store lock poisoned");
        let user = inner.users.iter_mut().find(|user| user.id == id)?;
        user.apply(payload);
        Some(user.clone())
    }

    /// Remove the user with the given id from the sequence
    ///
    /// Returns the removed record, or `None` if the id is absent. No
    /// tombstone is retained and the id is not reused.
    pub fn remove(&self, id: i64) -> Option<User> {
        let mut inner = self.inner.write().expect("user store lock poisoned");
        let index = inner.users.iter().position(|user| user.id == id)?;
        Some(inner.users.remove(index))
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        let inner = self.inner.read().expect("user store lock poisoned");
        inner.users.len()
    }

    /// Whether the store holds no users
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(email: &str, name: &str) -> CreateUser {
        CreateUser {
            email: email.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn create_assigns_positive_unique_ids() {
        let store = UserStore::new();
        let a = store.create(payload("a@example.com", "A"));
        let b = store.create(payload("b@example.com", "B"));

        assert!(a.id > 0);
        assert!(b.id > a.id);
    }

    #[test]
    fn create_grows_the_sequence_by_one() {
        let store = UserStore::new();
        assert!(store.is_empty());

        store.create(payload("a@example.com", "A"));
        assert_eq!(store.len(), 1);

        store.create(payload("b@example.com", "B"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn find_all_returns_insertion_order() {
        let store = UserStore::new();
        let a = store.create(payload("a@example.com", "A"));
        let b = store.create(payload("b@example.com", "B"));
        let c = store.create(payload("c@example.com", "C"));

        let ids: Vec<i64> = store.find_all().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[test]
    fn find_one_round_trips_the_created_payload() {
        let store = UserStore::new();
        let created = store.create(payload("alice@example.com", "Alice"));

        let found = store.find_one(created.id).unwrap();
        assert_eq!(found.email, "alice@example.com");
        assert_eq!(found.name, "Alice");
        assert_eq!(found, created);
    }

    #[test]
    fn find_one_absent_yields_none() {
        let store = UserStore::new();
        assert_eq!(store.find_one(999), None);
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let store = UserStore::new();
        let created = store.create(payload("alice@example.com", "Alice"));

        let updated = store
            .update(
                created.id,
                UpdateUser {
                    name: Some("Updated Name".to_string()),
                    email: None,
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Updated Name");
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        // The stored record matches what update returned
        assert_eq!(store.find_one(created.id), Some(updated));
    }

    #[test]
    fn update_absent_yields_none() {
        let store = UserStore::new();
        assert_eq!(store.update(999, UpdateUser::default()), None);
    }

    #[test]
    fn remove_shrinks_the_sequence_and_returns_the_record() {
        let store = UserStore::new();
        let a = store.create(payload("a@example.com", "A"));
        let b = store.create(payload("b@example.com", "B"));

        let removed = store.remove(a.id).unwrap();
        assert_eq!(removed.id, a.id);
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_one(a.id), None);
        assert_eq!(store.find_one(b.id), Some(b));
    }

    #[test]
    fn remove_absent_yields_none() {
        let store = UserStore::new();
        assert_eq!(store.remove(999), None);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = UserStore::new();
        let a = store.create(payload("a@example.com", "A"));
        let b = store.create(payload("b@example.com", "B"));

        store.remove(a.id).unwrap();

        // A naive len+1 scheme would hand out b.id again here
        let c = store.create(payload("c@example.com", "C"));
        assert_ne!(c.id, b.id);
        assert!(c.id > b.id);
    }

    #[test]
    fn seeded_store_holds_the_two_boot_records() {
        let store = UserStore::seeded();
        let users = store.find_all();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].email, "john@example.com");
        assert_eq!(users[0].name, "John Doe");
        assert_eq!(users[1].id, 2);
        assert_eq!(users[1].email, "jane@example.com");
        assert_eq!(users[1].name, "Jane Smith");
    }
}
