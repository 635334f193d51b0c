//! # Todo Chat Runtime
//!
//! Runtime implementation for the todo chat service.
//!
//! This crate provides the [`Store`]: the single owner of a feature's state.
//! Every action sent to the store runs the reducer to completion under one
//! write lock, so a lookup followed by a mutation is never interleaved with
//! another action, no matter how many request handlers share the store.
//!
//! ## Example
//!
//! ```ignore
//! use todo_chat_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action and get the reducer's output back
//! let output = store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use todo_chat_core::reducer::{Action, Reducer};
use tokio::sync::RwLock;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// Domain failures are part of the reducer's output and never show up
    /// here; this type only covers the runtime refusing to run an action.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after shutdown initiated.
        #[error("Store is shutting down")]
        ShutdownInProgress,
    }
}

pub use error::StoreError;

/// Health check status levels
///
/// Indicates the current health state of a component or system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum HealthStatus {
    /// Component is fully operational
    Healthy,

    /// Component is operational but experiencing issues
    Degraded,

    /// Component is not operational
    Unhealthy,
}

impl HealthStatus {
    /// Check if status is healthy
    #[must_use]
    pub const fn is_healthy(self) -> bool {
        matches!(self, Self::Healthy)
    }

    /// Check if status is unhealthy
    #[must_use]
    pub const fn is_unhealthy(self) -> bool {
        matches!(self, Self::Unhealthy)
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Degraded => write!(f, "degraded"),
            Self::Unhealthy => write!(f, "unhealthy"),
        }
    }
}

/// Health check result for a component
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheck {
    /// Name of the component being checked
    pub component: String,

    /// Current health status
    pub status: HealthStatus,

    /// Optional message providing details
    pub message: Option<String>,

    /// Optional metadata (e.g., counters)
    pub metadata: Vec<(String, String)>,
}

impl HealthCheck {
    /// Create a healthy check result
    #[must_use]
    pub fn healthy(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            status: HealthStatus::Healthy,
            message: None,
            metadata: Vec::new(),
        }
    }

    /// Create an unhealthy check result
    #[must_use]
    pub fn unhealthy(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            status: HealthStatus::Unhealthy,
            message: Some(message.into()),
            metadata: Vec::new(),
        }
    }

    /// Add metadata to the health check
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }
}

/// Store runtime for coordinating reducer execution.
pub mod store {
    use super::{
        Action, Arc, AtomicBool, AtomicUsize, HealthCheck, Ordering, Reducer, RwLock, StoreError,
    };

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock` for concurrent access)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(TodoState::new(), TodoReducer::new(), env);
    ///
    /// let created = store.send(TodoAction::Create {
    ///     title: Some("Buy milk".to_string()),
    ///     description: None,
    /// }).await?;
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        shutdown: Arc<AtomicBool>,
        actions_processed: Arc<AtomicUsize>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (business logic)
        /// - `environment`: Injected dependencies
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                shutdown: Arc::new(AtomicBool::new(false)),
                actions_processed: Arc::new(AtomicUsize::new(0)),
            }
        }

        /// Send an action through the reducer
        ///
        /// Takes the write lock for the whole reduction, so actions are
        /// applied one at a time in arrival order (last writer wins). The
        /// `store_send` span carries the action's [`Action::name`].
        ///
        /// # Returns
        ///
        /// The reducer's output for this action.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] once [`Store::shutdown`]
        /// has been called.
        ///
        /// # Example
        ///
        /// ```ignore
        /// let outcome = store.send(TodoAction::List).await?;
        /// ```
        #[tracing::instrument(skip(self, action), fields(action = action.name()), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<R::Output, StoreError>
        where
            A: Action,
        {
            let name = action.name();

            if self.shutdown.load(Ordering::SeqCst) {
                tracing::warn!(action = name, "Rejecting action: store is shutting down");
                metrics::counter!("store.actions.rejected").increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            let output = {
                let mut state = self.state.write().await;
                self.reducer.reduce(&mut state, action, &self.environment)
            };

            self.actions_processed.fetch_add(1, Ordering::Relaxed);
            metrics::counter!("store.actions.processed").increment(1);
            tracing::debug!(action = name, "Action processed");

            Ok(output)
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released promptly:
        ///
        /// ```ignore
        /// let todo_count = store.state(|s| s.count()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        /// Number of actions the store has run through its reducer.
        #[must_use]
        pub fn actions_processed(&self) -> usize {
            self.actions_processed.load(Ordering::Relaxed)
        }

        /// Stop accepting new actions.
        ///
        /// Actions already holding the lock finish normally; later calls to
        /// [`Store::send`] fail with [`StoreError::ShutdownInProgress`].
        pub fn shutdown(&self) {
            if !self.shutdown.swap(true, Ordering::SeqCst) {
                tracing::info!(
                    actions_processed = self.actions_processed(),
                    "Store shutdown initiated"
                );
                metrics::counter!("store.shutdown.initiated").increment(1);
            }
        }

        /// Whether [`Store::shutdown`] has been called.
        #[must_use]
        pub fn is_shutting_down(&self) -> bool {
            self.shutdown.load(Ordering::SeqCst)
        }

        /// Report the store's health
        ///
        /// Healthy while accepting actions, unhealthy once shutdown began.
        #[must_use]
        pub fn health(&self) -> HealthCheck {
            let check = if self.is_shutting_down() {
                HealthCheck::unhealthy("store", "Store is shutting down")
            } else {
                HealthCheck::healthy("store")
            };

            check.with_metadata("actions_processed", self.actions_processed().to_string())
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                shutdown: Arc::clone(&self.shutdown),
                actions_processed: Arc::clone(&self.actions_processed),
            }
        }
    }
}

// Re-export for convenience
pub use store::Store;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default)]
    struct CounterState {
        count: i64,
    }

    #[derive(Clone, Debug)]
    enum CounterAction {
        Increment,
        Reset,
    }

    impl Action for CounterAction {
        fn name(&self) -> &'static str {
            match self {
                Self::Increment => "increment",
                Self::Reset => "reset",
            }
        }
    }

    #[derive(Clone)]
    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = CounterState;
        type Action = CounterAction;
        type Environment = ();
        type Output = i64;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> i64 {
            match action {
                CounterAction::Increment => state.count += 1,
                CounterAction::Reset => state.count = 0,
            }
            state.count
        }
    }

    #[tokio::test]
    async fn send_returns_reducer_output() {
        let store = Store::new(CounterState::default(), CounterReducer, ());

        assert_eq!(store.send(CounterAction::Increment).await.unwrap(), 1);
        assert_eq!(store.send(CounterAction::Increment).await.unwrap(), 2);
        assert_eq!(store.send(CounterAction::Reset).await.unwrap(), 0);
        assert_eq!(store.actions_processed(), 3);
    }

    #[tokio::test]
    async fn state_reads_current_value() {
        let store = Store::new(CounterState::default(), CounterReducer, ());
        store.send(CounterAction::Increment).await.unwrap();

        let count = store.state(|s| s.count).await;
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn shutdown_rejects_new_actions() {
        let store = Store::new(CounterState::default(), CounterReducer, ());
        store.send(CounterAction::Increment).await.unwrap();

        store.shutdown();

        let result = store.send(CounterAction::Increment).await;
        assert_eq!(result, Err(StoreError::ShutdownInProgress));
        assert_eq!(store.state(|s| s.count).await, 1);
    }

    #[test]
    fn health_reflects_shutdown() {
        let store = Store::new(CounterState::default(), CounterReducer, ());
        assert!(store.health().status.is_healthy());

        store.shutdown();
        let health = store.health();
        assert!(health.status.is_unhealthy());
        assert_eq!(health.message.as_deref(), Some("Store is shutting down"));
    }

    #[test]
    fn health_status_display() {
        assert_eq!(HealthStatus::Healthy.to_string(), "healthy");
        assert_eq!(HealthStatus::Degraded.to_string(), "degraded");
        assert_eq!(HealthStatus::Unhealthy.to_string(), "unhealthy");
    }

    #[test]
    fn send_is_usable_from_sync_test() {
        let store = Store::new(CounterState::default(), CounterReducer, ());
        let count = tokio_test::block_on(store.send(CounterAction::Increment)).unwrap();
        assert_eq!(count, 1);
    }
}
