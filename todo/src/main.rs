//! Todo chat HTTP server.
//!
//! # Usage
//!
//! ```bash
//! PORT=3000 RUST_LOG=todo=debug cargo run --bin todo-server
//! ```
//!
//! # API Endpoints
//!
//! Each route is also served under `/api`.
//!
//! - `GET /health` - Liveness
//! - `GET /ready` - Store readiness
//! - `GET /todos` - List todos
//! - `POST /todos` - Create a todo
//! - `PUT /todos/:id` - Patch a todo
//! - `DELETE /todos/:id` - Delete a todo
//! - `POST /chat` - Chat responder
//!
//! # Example Requests
//!
//! ```bash
//! curl -X POST http://localhost:3000/todos \
//!   -H "Content-Type: application/json" \
//!   -d '{"title": "Buy milk", "description": "2 litres"}'
//!
//! curl -X POST http://localhost:3000/chat \
//!   -H "Content-Type: application/json" \
//!   -d '{"message": "show me my tasks"}'
//! ```

use anyhow::Context;
use std::sync::Arc;
use todo::{build_router, AppState, Config, TodoEnvironment, TodoReducer, TodoState};
use todo_chat_core::environment::{Clock, SystemClock, UuidGenerator};
use todo_chat_runtime::Store;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new(todo::config::DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        environment = %config.environment,
        address = %config.server.bind_address(),
        "Configuration loaded"
    );

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let env = TodoEnvironment::new(Arc::clone(&clock), Arc::new(UuidGenerator));
    let store = Arc::new(Store::new(TodoState::new(), TodoReducer::new(), env));

    let addr = config.server.bind_address();
    let app = build_router(AppState::new(Arc::clone(&store), clock, config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    store.shutdown();
    info!(
        actions_processed = store.actions_processed(),
        "Server stopped"
    );
    Ok(())
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            warn!(%error, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => {
                warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C signal, shutting down gracefully..."),
        () = terminate => info!("Received SIGTERM signal, shutting down gracefully..."),
    }
}
