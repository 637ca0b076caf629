//! Route definitions for the `/messages` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::messages;
use crate::state::AppState;

/// Routes mounted at `/messages`.
///
/// ```text
/// POST   /                     -> create
/// GET    /{handle}             -> conversation (must be @handle)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(messages::create))
        .route("/{handle}", get(messages::conversation))
}
