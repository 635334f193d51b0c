//! HTTP handlers for the todo API and chat endpoint.
//!
//! Each handler turns the request into one store action (or one responder
//! call), then maps the outcome onto the JSON envelope the browser client
//! expects: `{"success": true, ...}` on success, [`AppError`] on failure.

use crate::chat;
use crate::state::AppState;
use crate::types::{TodoAction, TodoId, TodoItem, TodoOutcome, TodoPatch, TodoState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use todo_chat_runtime::StoreError;
use todo_chat_web::{AppError, CorrelationId, JsonBody};

/// Request to create a todo.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateTodoRequest {
    /// Title; required and non-empty
    #[serde(default)]
    pub title: Option<String>,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

/// Request to send a chat message.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChatRequest {
    /// The user's message; required and non-empty
    #[serde(default)]
    pub message: Option<String>,
}

/// Response listing every todo.
#[derive(Debug, Clone, Serialize)]
pub struct ListTodosResponse {
    /// Always `true`
    pub success: bool,

    /// Todos in insertion order
    pub data: Vec<TodoItem>,

    /// Number of todos
    pub count: usize,
}

/// Response carrying a single todo.
#[derive(Debug, Clone, Serialize)]
pub struct TodoResponse {
    /// Always `true`
    pub success: bool,

    /// The created, updated, or deleted todo
    pub data: TodoItem,

    /// Confirmation text (deletes only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TodoResponse {
    fn new(data: TodoItem) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }
}

/// Response to a chat message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// Always `true`
    pub success: bool,

    /// The message as received
    pub user_message: String,

    /// The responder's reply
    pub bot_response: String,

    /// Reply timestamp (ISO 8601)
    pub timestamp: String,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"OK"`
    pub status: &'static str,

    /// Current time (ISO 8601)
    pub timestamp: String,

    /// Deployment label from configuration
    pub environment: String,
}

fn unexpected(outcome: &TodoOutcome) -> AppError {
    AppError::internal("Unexpected store outcome")
        .with_source(anyhow::anyhow!("unexpected outcome: {outcome:?}"))
}

fn iso_now(state: &AppState) -> String {
    state.clock.now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Liveness check.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// { "status": "OK", "timestamp": "2025-01-01T00:00:00.000Z", "environment": "production" }
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: iso_now(&state),
        environment: state.config.environment.clone(),
    })
}

/// List every todo.
///
/// # Endpoint
///
/// ```text
/// GET /todos
/// ```
///
/// # Response
///
/// ```json
/// { "success": true, "data": [ ... ], "count": 2 }
/// ```
pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<ListTodosResponse>, AppError> {
    match state.store.send(TodoAction::List).await?? {
        TodoOutcome::Listed { todos, count } => Ok(Json(ListTodosResponse {
            success: true,
            data: todos,
            count,
        })),
        other => Err(unexpected(&other)),
    }
}

/// Create a todo.
///
/// # Endpoint
///
/// ```text
/// POST /todos
/// Content-Type: application/json
///
/// { "title": "Buy milk", "description": "2 litres" }
/// ```
///
/// # Response
///
/// `201 Created` with `{ "success": true, "data": { ...todo } }`, or
/// `400` with `Title is required`.
pub async fn create_todo(
    State(state): State<AppState>,
    correlation_id: CorrelationId,
    JsonBody(request): JsonBody<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    let action = TodoAction::Create {
        title: request.title,
        description: request.description,
    };

    match state.store.send(action).await?.inspect_err(|error| {
        tracing::warn!(%correlation_id, %error, "Create rejected");
    })? {
        TodoOutcome::Created(todo) => {
            tracing::info!(%correlation_id, todo_id = %todo.id, "Todo created");
            Ok((StatusCode::CREATED, Json(TodoResponse::new(todo))))
        }
        other => Err(unexpected(&other)),
    }
}

/// Patch a todo.
///
/// # Endpoint
///
/// ```text
/// PUT /todos/:id
/// Content-Type: application/json
///
/// { "completed": true }
/// ```
///
/// An empty `title` is ignored; `description` may be set to `""`.
/// Unknown ids yield `404 Todo not found`.
pub async fn update_todo(
    State(state): State<AppState>,
    correlation_id: CorrelationId,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<TodoPatch>,
) -> Result<Json<TodoResponse>, AppError> {
    let action = TodoAction::Update {
        id: TodoId::new(id),
        patch,
    };

    match state.store.send(action).await?.inspect_err(|error| {
        tracing::warn!(%correlation_id, %error, "Update rejected");
    })? {
        TodoOutcome::Updated(todo) => {
            tracing::info!(%correlation_id, todo_id = %todo.id, "Todo updated");
            Ok(Json(TodoResponse::new(todo)))
        }
        other => Err(unexpected(&other)),
    }
}

/// Delete a todo.
///
/// # Endpoint
///
/// ```text
/// DELETE /todos/:id
/// ```
///
/// # Response
///
/// `{ "success": true, "data": { ...removed todo }, "message": "Todo deleted" }`,
/// or `404 Todo not found`.
pub async fn delete_todo(
    State(state): State<AppState>,
    correlation_id: CorrelationId,
    Path(id): Path<String>,
) -> Result<Json<TodoResponse>, AppError> {
    let action = TodoAction::Delete { id: TodoId::new(id) };

    match state.store.send(action).await?.inspect_err(|error| {
        tracing::warn!(%correlation_id, %error, "Delete rejected");
    })? {
        TodoOutcome::Deleted(todo) => {
            tracing::info!(%correlation_id, todo_id = %todo.id, "Todo deleted");
            Ok(Json(TodoResponse {
                message: Some("Todo deleted".to_string()),
                ..TodoResponse::new(todo)
            }))
        }
        other => Err(unexpected(&other)),
    }
}

/// Answer a chat message.
///
/// # Endpoint
///
/// ```text
/// POST /chat
/// Content-Type: application/json
///
/// { "message": "show me my tasks" }
/// ```
///
/// Like the store-backed routes, answers `503` once the store is shutting
/// down.
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "userMessage": "show me my tasks",
///   "botResponse": "You have 3 todos. Use the Get Todos button to see them all.",
///   "timestamp": "2025-01-01T00:00:00.000Z"
/// }
/// ```
pub async fn chat(
    State(state): State<AppState>,
    correlation_id: CorrelationId,
    JsonBody(request): JsonBody<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if state.store.is_shutting_down() {
        return Err(StoreError::ShutdownInProgress.into());
    }

    let message = request.message.unwrap_or_default();
    let todo_count = state.store.state(TodoState::count).await;

    let reply = chat::respond(&message, todo_count)?;
    tracing::debug!(%correlation_id, intent = ?reply.intent, "Chat reply computed");

    Ok(Json(ChatResponse {
        success: true,
        user_message: message,
        bot_response: reply.text,
        timestamp: iso_now(&state),
    }))
}
