//! In-memory todo list served over HTTP, with a keyword chat responder.
//!
//! The todo collection lives in a single [`TodoStore`]: every create, update,
//! delete, and list goes through [`TodoReducer`] under the store's write lock,
//! so concurrent requests observe a consistent sequence of mutations. The chat
//! responder ([`chat::respond`]) is a pure function of the message and the
//! current todo count.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use todo::{build_router, AppState, Config, TodoEnvironment, TodoReducer, TodoState};
//! use todo_chat_core::environment::{Clock, SystemClock, UuidGenerator};
//! use todo_chat_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let clock: Arc<dyn Clock> = Arc::new(SystemClock);
//! let env = TodoEnvironment::new(Arc::clone(&clock), Arc::new(UuidGenerator));
//! let store = Arc::new(Store::new(TodoState::new(), TodoReducer::new(), env));
//!
//! let app = build_router(AppState::new(store, clock, Config::from_env()));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod chat;
pub mod config;
pub mod error;
pub mod handlers;
pub mod reducer;
pub mod router;
pub mod state;
pub mod types;

pub use config::Config;
pub use error::TodoError;
pub use reducer::{TodoEnvironment, TodoReducer, TodoStore};
pub use router::build_router;
pub use state::AppState;
pub use types::{TodoAction, TodoId, TodoItem, TodoOutcome, TodoPatch, TodoState};
