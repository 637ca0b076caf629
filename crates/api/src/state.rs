use std::sync::Arc;

use cruddur_core::identity::{FixedIdentity, IdentityResolver};
use cruddur_core::services::Services;

use crate::config::ServerConfig;
use crate::reporting::ErrorReporter;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (origins, diagnostics facts).
    pub config: Arc<ServerConfig>,
    /// One handle per service the route table dispatches to.
    pub services: Services,
    /// Resolves who the caller is.
    pub identity: Arc<dyn IdentityResolver>,
    /// Forwards server errors to the external error tracker.
    pub reporter: ErrorReporter,
}

impl AppState {
    /// Production wiring: stub services, the fixed placeholder identity, and
    /// an error reporter built from `config.reporting`.
    pub fn new(config: ServerConfig) -> Self {
        let identity = Arc::new(FixedIdentity::new(config.current_user_handle.clone()));
        let reporter = ErrorReporter::from_config(&config.reporting);
        Self {
            config: Arc::new(config),
            services: Services::stub(),
            identity,
            reporter,
        }
    }

    /// Replace the service bundle, keeping everything else.
    pub fn with_services(mut self, services: Services) -> Self {
        self.services = services;
        self
    }
}
