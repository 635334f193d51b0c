//! # Todo Chat Core
//!
//! Core traits and types for the todo chat service.
//!
//! This crate provides the fundamental abstractions shared by the domain and
//! the runtime: the [`reducer::Reducer`] trait that holds all business logic,
//! and the [`environment`] capabilities (time and identifier generation) that
//! reducers receive by injection instead of reaching for globals.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature
//! - **Action**: All possible inputs to a reducer, named via [`reducer::Action`]
//! - **Reducer**: Function `(State, Action, Environment) → Output`
//! - **Environment**: Injected dependencies via traits
//!
//! ## Example
//!
//! ```ignore
//! use todo_chat_core::reducer::Reducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = CounterEnvironment;
//!     type Output = i64;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &CounterEnvironment,
//!     ) -> i64 {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         state.count
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};

/// Reducer module - The core trait for business logic
///
/// Reducers are functions `(State, Action, Environment) → Output`.
/// They contain all business logic and are deterministic given a
/// deterministic environment.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    /// - `Output`: What the caller receives back for one action
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodoReducer {
    ///     type State = TodoState;
    ///     type Action = TodoAction;
    ///     type Environment = TodoEnvironment;
    ///     type Output = Result<TodoOutcome, TodoError>;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut TodoState,
    ///         action: TodoAction,
    ///         env: &TodoEnvironment,
    ///     ) -> Self::Output {
    ///         match action {
    ///             TodoAction::List => Ok(TodoOutcome::Listed {
    ///                 todos: state.todos.clone(),
    ///                 count: state.count(),
    ///             }),
    ///             // ...
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// The result handed back to whoever sent the action
        type Output;

        /// Reduce an action into state changes and an output
        ///
        /// This function:
        /// 1. Validates the action
        /// 2. Updates state in place (only when validation succeeds)
        /// 3. Returns the output for the caller
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Self::Output;
    }

    /// Metadata every action exposes to the runtime
    ///
    /// The store records [`Action::name`] on its `store_send` span, so logs
    /// show which action ran without dumping its payload.
    ///
    /// ```ignore
    /// impl Action for TodoAction {
    ///     fn name(&self) -> &'static str {
    ///         match self {
    ///             Self::List => "list",
    ///             // ...
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Action {
        /// Short, stable name for logs and metrics
        fn name(&self) -> &'static str;
    }
}

/// Environment module - Dependency injection traits
///
/// All sources of non-determinism (wall clock, identifier generation) are
/// abstracted behind traits and injected via the Environment parameter.
/// Deterministic test implementations live in `todo-chat-testing`.
pub mod environment {
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Test - fixed time for deterministic tests
    /// struct FixedClock { time: DateTime<Utc> }
    /// impl Clock for FixedClock {
    ///     fn now(&self) -> DateTime<Utc> {
    ///         self.time
    ///     }
    /// }
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// Identifier generator - abstracts id allocation for testability
    ///
    /// Implementations must never hand out the same identifier twice over
    /// their lifetime.
    pub trait IdGenerator: Send + Sync {
        /// Allocate a fresh identifier
        fn next_id(&self) -> String;
    }

    /// Production id generator producing random UUID v4 strings.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidGenerator;

    impl IdGenerator for UuidGenerator {
        fn next_id(&self) -> String {
            Uuid::new_v4().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::environment::{Clock, IdGenerator, SystemClock, UuidGenerator};

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn uuid_generator_yields_distinct_ids() {
        let ids = UuidGenerator;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
    }
}
