//! Origin allow-list guard for `/api/*`.
//!
//! The CORS layer only decorates responses; this guard refuses requests
//! whose `Origin` header names a site outside `FRONTEND_URL`/`BACKEND_URL`
//! before they reach a handler. Requests without an `Origin` header
//! (curl, server-to-server) pass through.

use axum::extract::{Request, State};
use axum::http::header::ORIGIN;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::state::AppState;

pub async fn reject_foreign_origins(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let rejected = match request.headers().get(ORIGIN) {
        None => None,
        Some(value) => match value.to_str() {
            Ok(origin) if state.config.is_allowed_origin(origin) => None,
            Ok(origin) => Some(origin.to_string()),
            Err(_) => Some("<non-ascii>".to_string()),
        },
    };

    if let Some(origin) = rejected {
        tracing::warn!(%origin, path = %request.uri().path(), "Rejected cross-origin request");
        return AppError::Forbidden(format!("Origin {origin} is not allowed")).into_response();
    }
    next.run(request).await
}
