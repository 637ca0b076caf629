pub mod activities;
pub mod health;
pub mod messages;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health-check                                  liveness (GET)
/// /env-check                                     configuration facts (GET)
///
/// /message_groups                                MessageGroups (GET)
/// /messages                                      CreateMessage (POST)
/// /messages/@{handle}                            Messages (GET)
///
/// /activities                                    CreateActivity (POST)
/// /activities/home                               HomeActivities (GET, raw)
/// /activities/notifications                      NotificationsActivities (GET, raw)
/// /activities/search?term=                       SearchActivities (GET)
/// /activities/@{handle}                          UserActivities (GET)
/// /activities/{uuid}                             ShowActivity (GET, raw)
/// /activities/{uuid}/reply                       CreateReply (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .route("/message_groups", get(handlers::messages::groups))
        .nest("/messages", messages::router())
        .nest("/activities", activities::router())
}
