//! Axum web framework integration for the todo chat service.
//!
//! This crate holds the imperative shell that every HTTP-facing feature
//! shares, keeping domain crates free of transport concerns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← HTTP, JSON, CORS
//! │  - Request parsing                      │  ← Correlation IDs
//! │  - Response serialization               │  ← Logging
//! ├─────────────────────────────────────────┤
//! │         Functional Core                 │
//! │  - Business logic (reducers)            │  ← Testable at memory speed
//! │  - State transformations                │  ← No I/O
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at Axum handler
//! 2. **Extract data** from request (JSON body, path, correlation ID)
//! 3. **Build Action** from extracted data
//! 4. **Send** action through the `Store`
//! 5. **Map result** to HTTP response (`AppError` on failure)

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::{CorrelationId, JsonBody};
pub use middleware::{correlation_id_layer, CORRELATION_ID_HEADER};
