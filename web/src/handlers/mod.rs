//! HTTP request handlers.
//!
//! Domain-agnostic handlers shared by every service built on this crate.

pub mod health;

pub use health::{health_check_with_store, route_not_found};
