//! Custom Axum extractors.
//!
//! - `CorrelationId`: the request's correlation ID (assigned by the
//!   middleware, or read from the header when the layer is absent)
//! - `JsonBody`: `axum::Json` whose rejections use the [`AppError`] envelope
//!
//! # Examples
//!
//! ```ignore
//! use todo_chat_web::extractors::{CorrelationId, JsonBody};
//!
//! async fn handler(
//!     correlation_id: CorrelationId,
//!     JsonBody(request): JsonBody<CreateTodoRequest>,
//! ) -> Result<Json<Response>, AppError> {
//!     tracing::info!(correlation_id = %correlation_id, "Processing request");
//!     Ok(Json(response))
//! }
//! ```

use crate::error::AppError;
use crate::middleware::CORRELATION_ID_HEADER;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::{header, request::Parts},
    Json,
};
use serde::de::DeserializeOwned;
use std::fmt;
use uuid::Uuid;

/// Correlation ID for request tracing.
///
/// Prefers the ID stored in request extensions by
/// [`correlation_id_layer`](crate::middleware::correlation_id_layer), so the
/// handler, the span, and the response header all agree. Without the layer it
/// falls back to the `X-Correlation-ID` header, then to a fresh UUID v4.
///
/// # Example
///
/// ```ignore
/// async fn handler(correlation_id: CorrelationId) -> String {
///     format!("Request ID: {}", correlation_id.0)
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrelationId(pub Uuid);

impl CorrelationId {
    /// Parse from a header value, ignoring anything that is not a UUID.
    pub(crate) fn from_header(value: Option<&http::HeaderValue>) -> Option<Self> {
        value
            .and_then(|v| v.to_str().ok())
            .and_then(|s| Uuid::parse_str(s).ok())
            .map(Self)
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CorrelationId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(id) = parts.extensions.get::<Self>() {
            return Ok(*id);
        }

        Ok(Self::from_header(parts.headers.get(CORRELATION_ID_HEADER))
            .unwrap_or_else(|| Self(Uuid::new_v4())))
    }
}

/// JSON request body.
///
/// Same as `axum::Json`, but a missing content type or a body that does not
/// deserialize becomes a 400 in the service's error envelope instead of
/// Axum's plain-text rejection. A request with no body at all and no
/// `Content-Type` yields `T::default()`, so handlers see an empty object.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !req.headers().contains_key(header::CONTENT_TYPE) {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
            if bytes.is_empty() {
                return Ok(Self(T::default()));
            }
            tracing::warn!("Rejected request body without content type");
            return Err(AppError::bad_request(
                "Expected request with `Content-Type: application/json`",
            ));
        }

        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::warn!(error = %rejection.body_text(), "Rejected request body");
                Err(AppError::bad_request(rejection.body_text()))
            }
        }
    }
}
