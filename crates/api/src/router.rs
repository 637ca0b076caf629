//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (`main.rs`)
//! and integration tests (`tests/common/mod.rs`) use the exact same middleware
//! stack.

use std::any::Any;
use std::time::Duration;

use axum::http::header::{CONTENT_TYPE, IF_MODIFIED_SINCE, LINK, LOCATION};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::middleware::origin;
use crate::reporting;
use crate::routes;
use crate::state::AppState;

/// Build the full application [`Router`] with all middleware layers.
///
/// `/api/*` carries, innermost first:
///
/// 1. Panic recovery (catch panics, return 500)
/// 2. Request timeout
/// 3. CORS
/// 4. Origin allow-list guard
///
/// CORS wraps the panic and timeout layers so their JSON errors still carry
/// `Access-Control-Allow-Origin` for allowed origins.
///
/// The whole app is then wrapped, bottom-up, in:
///
/// 1. Server-error reporting
/// 2. Propagate request ID to response
/// 3. Structured request/response tracing
/// 4. Set request ID on incoming requests
pub fn build_app_router(state: AppState) -> Router {
    let config = state.config.clone();
    let request_id_header = HeaderName::from_static("x-request-id");

    let api = routes::api_routes()
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(build_cors_layer(&config))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            origin::reject_foreign_origins,
        ));

    Router::new()
        .nest("/api", api)
        // -- Middleware stack (applied bottom-up) --
        .layer(middleware::from_fn_with_state(
            state.clone(),
            reporting::report_server_errors,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}

/// Build the CORS middleware layer for `/api/*`.
///
/// Origins were validated when the configuration was loaded.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins()
        .into_iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::OPTIONS, Method::GET, Method::HEAD, Method::POST])
        .allow_headers([CONTENT_TYPE, IF_MODIFIED_SINCE])
        .expose_headers([LOCATION, LINK])
}

/// Convert a caught panic into the standard JSON 500.
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic payload".to_string());

    AppError::InternalError(format!("handler panicked: {detail}")).into_response()
}
