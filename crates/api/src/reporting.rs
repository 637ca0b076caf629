//! Error reporting to Rollbar.
//!
//! Every 5xx response is forwarded as a Rollbar item. Delivery happens on a
//! spawned task and failures are only logged.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use serde_json::{json, Value};

use crate::config::ReportingConfig;
use crate::state::AppState;

/// Default Rollbar item ingestion endpoint.
pub const ROLLBAR_ENDPOINT: &str = "https://api.rollbar.com/api/1/item/";

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for a failed delivery.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Rollbar answered with a non-2xx status code.
    #[error("Rollbar returned HTTP {0}")]
    HttpStatus(u16),
}

/// What went wrong, as seen from the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub method: String,
    pub path: String,
    pub status: u16,
    pub request_id: Option<String>,
}

struct Rollbar {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
    environment: String,
}

/// Handle to the error tracker. Disabled reporters accept and drop reports.
#[derive(Clone, Default)]
pub struct ErrorReporter {
    inner: Option<Arc<Rollbar>>,
}

impl ErrorReporter {
    /// A reporter that drops everything.
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    /// Build a reporter from configuration.
    ///
    /// Without an access token, or if the HTTP client cannot be built, the
    /// reporter is disabled and a message is logged.
    pub fn from_config(config: &ReportingConfig) -> Self {
        let Some(access_token) = config.access_token.clone() else {
            tracing::info!("ROLLBAR_ACCESS_TOKEN not set, error reporting disabled");
            return Self::disabled();
        };

        match reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build() {
            Ok(client) => {
                tracing::info!(environment = %config.environment, "Rollbar error reporting enabled");
                Self {
                    inner: Some(Arc::new(Rollbar {
                        client,
                        endpoint: config.endpoint.clone(),
                        access_token,
                        environment: config.environment.clone(),
                    })),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to build Rollbar client, error reporting disabled");
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Queue a report for delivery. Returns immediately.
    pub fn report(&self, report: ErrorReport) {
        let Some(rollbar) = self.inner.clone() else {
            return;
        };
        tokio::spawn(async move {
            if let Err(e) = rollbar.send(&report).await {
                tracing::warn!(error = %e, path = %report.path, "Failed to deliver error report");
            }
        });
    }
}

impl Rollbar {
    async fn send(&self, report: &ErrorReport) -> Result<(), ReportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("X-Rollbar-Access-Token", &self.access_token)
            .json(&rollbar_item(&self.environment, report))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ReportError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

/// Rollbar item payload for a server error.
pub fn rollbar_item(environment: &str, report: &ErrorReport) -> Value {
    json!({
        "data": {
            "environment": environment,
            "level": "error",
            "platform": "rust",
            "language": "rust",
            "timestamp": chrono::Utc::now().timestamp(),
            "title": format!("{} {} -> {}", report.method, report.path, report.status),
            "body": {
                "message": {
                    "body": format!(
                        "{} {} responded with HTTP {}",
                        report.method, report.path, report.status
                    ),
                },
            },
            "request": {
                "url": report.path,
                "method": report.method,
            },
            "context": report.request_id,
            "server": {
                "code_version": env!("CARGO_PKG_VERSION"),
            },
        }
    })
}

/// Middleware: report every response with a 5xx status.
pub async fn report_server_errors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let response = next.run(request).await;

    let status = response.status();
    if status.is_server_error() {
        tracing::error!(%method, %path, status = status.as_u16(), "Request failed with server error");
        state.reporter.report(ErrorReport {
            method,
            path,
            status: status.as_u16(),
            request_id,
        });
    }
    response
}
