/// Shared application state
use roster_store::UserStore;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// The store is constructed once (in `main` or in a test) and injected
/// here; handlers never reach for ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
}

impl AppState {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }
}
