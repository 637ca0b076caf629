use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Liveness response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub success: bool,
}

/// Configuration facts. Secrets are described, never echoed.
#[derive(Serialize)]
pub struct EnvCheckResponse {
    pub rollbar_access_token_present: bool,
    pub rollbar_access_token_length: usize,
    pub honeycomb_api_key_present: bool,
    pub frontend_url_present: bool,
    pub frontend_url: Option<String>,
    pub backend_url_present: bool,
    pub backend_url: Option<String>,
}

/// GET /api/health-check -- always `{"success": true}`.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { success: true })
}

/// GET /api/env-check -- read-only view of the deployment configuration.
async fn env_check(State(state): State<AppState>) -> Json<EnvCheckResponse> {
    let config = &state.config;
    let token = config.reporting.access_token.as_deref();

    Json(EnvCheckResponse {
        rollbar_access_token_present: token.is_some(),
        rollbar_access_token_length: token.map_or(0, str::len),
        honeycomb_api_key_present: config.honeycomb_api_key.is_some(),
        frontend_url_present: config.frontend_url.is_some(),
        frontend_url: config.frontend_url.clone(),
        backend_url_present: config.backend_url.is_some(),
        backend_url: config.backend_url.clone(),
    })
}

/// Mount diagnostic routes (under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health-check", get(health_check))
        .route("/env-check", get(env_check))
}
