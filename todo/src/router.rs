//! Todo chat HTTP router.
//!
//! Composes all handlers into a single Axum router.

use crate::handlers;
use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::state::AppState;
use crate::types::{TodoAction, TodoState};
use axum::{
    http::{header, Method},
    routing::{get, post, put},
    Router,
};
use todo_chat_web::{correlation_id_layer, handlers::health_check_with_store, handlers::route_not_found};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Routes served both at the root and under `/api`.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/:id",
            put(handlers::update_todo).delete(handlers::delete_todo),
        )
        .route("/chat", post(handlers::chat))
}

/// Permissive CORS: any origin, the five verbs the client uses.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Create the application router with all endpoints.
///
/// # Routes
///
/// - `GET /health` - Liveness
/// - `GET /ready` - Store readiness
/// - `GET /todos` - List todos
/// - `POST /todos` - Create a todo
/// - `PUT /todos/:id` - Patch a todo
/// - `DELETE /todos/:id` - Delete a todo
/// - `POST /chat` - Chat responder
///
/// Every route except `/ready` is also served under `/api`. Anything else
/// gets a `404 Not Found` envelope.
///
/// # Example
///
/// ```rust,ignore
/// let app = build_router(AppState::new(store, clock, Config::from_env()));
/// axum::serve(listener, app).await?;
/// ```
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/ready",
            get(health_check_with_store::<TodoState, TodoAction, TodoEnvironment, TodoReducer>),
        )
        .merge(api_routes())
        .nest("/api", api_routes())
        .fallback(route_not_found)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .layer(correlation_id_layer())
        .with_state(state)
}
