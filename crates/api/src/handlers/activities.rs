//! Handlers for the `/activities` resource.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use cruddur_core::activity::{Activity, Reply};
use cruddur_core::identity::CurrentUser;
use cruddur_core::services::{
    CreateActivityParams, CreateReplyParams, SearchActivitiesParams, Service,
    ShowActivityParams, UserActivitiesParams,
};
use serde::Deserialize;

use super::handle_segment;
use crate::error::AppResult;
use crate::response::{Raw, ServiceResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub term: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateActivityBody {
    pub message: Option<String>,
    pub ttl: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateReplyBody {
    pub message: Option<String>,
}

/// GET /api/activities/home
pub async fn home(State(state): State<AppState>) -> Raw<Vec<Activity>> {
    Raw(state.services.home_activities.run(()).await)
}

/// GET /api/activities/notifications
pub async fn notifications(State(state): State<AppState>) -> Raw<Vec<Activity>> {
    Raw(state.services.notifications_activities.run(()).await)
}

/// GET /api/activities/search?term=
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> AppResult<ServiceResponse<Vec<Activity>>> {
    let Query(query) = query?;
    tracing::debug!(term = ?query.term, "Searching activities");

    let result = state
        .services
        .search_activities
        .run(SearchActivitiesParams {
            search_term: query.term,
        })
        .await;
    Ok(result.into())
}

/// POST /api/activities
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<CreateActivityBody>, JsonRejection>,
) -> AppResult<ServiceResponse<Activity>> {
    let Json(body) = body?;
    tracing::debug!(handle = %user.handle, ttl = ?body.ttl, "Creating activity");

    let result = state
        .services
        .create_activity
        .run(CreateActivityParams {
            message: body.message,
            user_handle: Some(user.handle),
            ttl: body.ttl,
        })
        .await;
    Ok(result.into())
}

/// GET /api/activities/{segment}
///
/// `@handle` lists that user's activities under the errors/data convention.
/// Anything else is treated as an activity id and looked up raw: the match
/// or `null`, always 200.
pub async fn show_or_user(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> Response {
    if let Some(handle) = handle_segment(&segment) {
        tracing::debug!(handle, "Listing user activities");
        let result = state
            .services
            .user_activities
            .run(UserActivitiesParams {
                user_handle: Some(handle.to_string()),
            })
            .await;
        return ServiceResponse::from(result).into_response();
    }

    tracing::debug!(activity_uuid = %segment, "Showing activity");
    let activity = state
        .services
        .show_activity
        .run(ShowActivityParams {
            activity_uuid: segment,
        })
        .await;
    Raw(activity).into_response()
}

/// POST /api/activities/{activity_uuid}/reply
pub async fn reply(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(activity_uuid): Path<String>,
    body: Result<Json<CreateReplyBody>, JsonRejection>,
) -> AppResult<ServiceResponse<Reply>> {
    let Json(body) = body?;
    tracing::debug!(handle = %user.handle, %activity_uuid, "Creating reply");

    let result = state
        .services
        .create_reply
        .run(CreateReplyParams {
            message: body.message,
            user_handle: Some(user.handle),
            activity_uuid: Some(activity_uuid),
        })
        .await;
    Ok(result.into())
}
