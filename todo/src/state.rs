//! Application state for the todo HTTP server.

use crate::config::Config;
use crate::reducer::TodoStore;
use axum::extract::FromRef;
use std::sync::Arc;
use todo_chat_core::environment::Clock;

/// Application state shared across all HTTP handlers.
///
/// Cloned (cheaply via `Arc`) for each request.
#[derive(Clone)]
pub struct AppState {
    /// The todo store; owns the collection
    pub store: Arc<TodoStore>,
    /// Clock for response timestamps
    pub clock: Arc<dyn Clock>,
    /// Loaded configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<TodoStore>, clock: Arc<dyn Clock>, config: Config) -> Self {
        Self {
            store,
            clock,
            config: Arc::new(config),
        }
    }
}

// Lets the generic readiness handler pull the store straight out of `AppState`
impl FromRef<AppState> for Arc<TodoStore> {
    fn from_ref(app_state: &AppState) -> Self {
        Arc::clone(&app_state.store)
    }
}
