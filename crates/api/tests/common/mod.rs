#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use cruddur_core::services::{DynService, Service};
use http_body_util::BodyExt;
use tower::ServiceExt;

use cruddur_api::config::{LogFormat, ReportingConfig, ServerConfig};
use cruddur_api::router::build_app_router;
use cruddur_api::state::AppState;

pub const FRONTEND_ORIGIN: &str = "http://localhost:3000";
pub const BACKEND_ORIGIN: &str = "http://localhost:4567";

/// Build a test `ServerConfig` with safe defaults.
///
/// Allows the two local development origins and leaves error reporting
/// disabled so no test ever talks to the network.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        frontend_url: Some(FRONTEND_ORIGIN.to_string()),
        backend_url: Some(BACKEND_ORIGIN.to_string()),
        honeycomb_api_key: None,
        reporting: ReportingConfig {
            access_token: None,
            environment: "test".to_string(),
            ..ReportingConfig::default()
        },
        current_user_handle: "andrewbrown".to_string(),
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

/// Full application router over the stub services.
pub fn build_test_app() -> Router {
    build_app_router(AppState::new(test_config()))
}

/// Full application router over a caller-supplied state.
pub fn build_test_app_with(state: AppState) -> Router {
    build_app_router(state)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fake services
// ---------------------------------------------------------------------------

/// Service double that records every parameter set it receives and answers
/// with a canned output.
pub struct Recording<P, O> {
    calls: Mutex<Vec<P>>,
    output: O,
}

impl<P, O> Recording<P, O> {
    pub fn new(output: O) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            output,
        })
    }
}

impl<P: Clone, O> Recording<P, O> {
    pub fn calls(&self) -> Vec<P> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl<P, O> Service for Recording<P, O>
where
    P: Send + 'static,
    O: Clone + Send + Sync + 'static,
{
    type Params = P;
    type Output = O;

    async fn run(&self, params: P) -> O {
        self.calls.lock().unwrap().push(params);
        self.output.clone()
    }
}

/// Erase a recording double into the handle type `Services` stores.
pub fn erase<P, O>(service: &Arc<Recording<P, O>>) -> DynService<P, O>
where
    P: Send + 'static,
    O: Clone + Send + Sync + 'static,
{
    service.clone()
}

/// Service double that panics when called.
pub struct Panicking;

#[async_trait]
impl Service for Panicking {
    type Params = ();
    type Output = Vec<cruddur_core::activity::Activity>;

    async fn run(&self, _params: ()) -> Self::Output {
        panic!("feed store exploded");
    }
}

/// Service double that outlives any short request timeout.
pub struct Sleeping(pub std::time::Duration);

#[async_trait]
impl Service for Sleeping {
    type Params = ();
    type Output = Vec<cruddur_core::activity::Activity>;

    async fn run(&self, _params: ()) -> Self::Output {
        tokio::time::sleep(self.0).await;
        Vec::new()
    }
}
