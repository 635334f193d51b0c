//! Domain errors and their HTTP mapping.

use crate::types::TodoId;
use thiserror::Error;
use todo_chat_web::AppError;

/// Why a todo operation or chat request was refused
///
/// Both variants are raised at the point of violation and never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// A required input was missing or empty
    #[error("{0}")]
    Validation(String),

    /// No todo carries the referenced id
    #[error("Todo with ID {0} not found")]
    NotFound(TodoId),
}

impl TodoError {
    /// Validation failure with the given message
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::Validation(message) => Self::bad_request(message),
            TodoError::NotFound(_) => Self::not_found("Todo"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn validation_maps_to_bad_request() {
        let err: AppError = TodoError::validation("Title is required").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Title is required");
    }

    #[test]
    fn not_found_maps_to_404_without_leaking_id() {
        let err: AppError = TodoError::NotFound(TodoId::new("abc")).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Todo not found");
    }

    #[test]
    fn display_includes_id() {
        let err = TodoError::NotFound(TodoId::new("abc"));
        assert_eq!(err.to_string(), "Todo with ID abc not found");
    }
}
