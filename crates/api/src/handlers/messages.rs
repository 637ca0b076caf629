//! Handlers for `/message_groups` and `/messages`.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use cruddur_core::identity::CurrentUser;
use cruddur_core::message::{Message, MessageGroup};
use cruddur_core::services::{CreateMessageParams, MessageGroupsParams, MessagesParams, Service};
use serde::Deserialize;

use super::handle_segment;
use crate::error::{AppError, AppResult};
use crate::response::ServiceResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ConversationQuery {
    pub user_receiver_handle: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateMessageBody {
    pub user_receiver_handle: Option<String>,
    pub message: Option<String>,
}

/// GET /api/message_groups
pub async fn groups(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ServiceResponse<Vec<MessageGroup>> {
    state
        .services
        .message_groups
        .run(MessageGroupsParams {
            user_handle: Some(user.handle),
        })
        .await
        .into()
}

/// GET /api/messages/@{handle}
///
/// The receiver is the path handle unless `?user_receiver_handle=` overrides it.
pub async fn conversation(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(segment): Path<String>,
    query: Result<Query<ConversationQuery>, QueryRejection>,
) -> AppResult<ServiceResponse<Vec<Message>>> {
    let handle = handle_segment(&segment)
        .ok_or_else(|| AppError::NotFound(format!("No conversation at {segment}")))?;
    let Query(query) = query?;

    let receiver = query
        .user_receiver_handle
        .unwrap_or_else(|| handle.to_string());
    tracing::debug!(sender = %user.handle, %receiver, "Loading conversation");

    let result = state
        .services
        .messages
        .run(MessagesParams {
            user_sender_handle: Some(user.handle),
            user_receiver_handle: Some(receiver),
        })
        .await;
    Ok(result.into())
}

/// POST /api/messages
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<CreateMessageBody>, JsonRejection>,
) -> AppResult<ServiceResponse<Message>> {
    let Json(body) = body?;
    tracing::debug!(sender = %user.handle, receiver = ?body.user_receiver_handle, "Sending message");

    let result = state
        .services
        .create_message
        .run(CreateMessageParams {
            message: body.message,
            user_sender_handle: Some(user.handle),
            user_receiver_handle: body.user_receiver_handle,
        })
        .await;
    Ok(result.into())
}
