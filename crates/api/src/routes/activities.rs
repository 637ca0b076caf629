//! Route definitions for the `/activities` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::activities;
use crate::state::AppState;

/// Routes mounted at `/activities`.
///
/// Static segments win over the `{activity}` capture, so `home`,
/// `notifications` and `search` never reach `show_or_user`.
///
/// ```text
/// POST   /                     -> create
/// GET    /home                 -> home
/// GET    /notifications        -> notifications
/// GET    /search               -> search
/// GET    /{activity}           -> show_or_user (@handle or uuid)
/// POST   /{activity}/reply     -> reply
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(activities::create))
        .route("/home", get(activities::home))
        .route("/notifications", get(activities::notifications))
        .route("/search", get(activities::search))
        .route("/{activity}", get(activities::show_or_user))
        .route("/{activity}/reply", post(activities::reply))
}
