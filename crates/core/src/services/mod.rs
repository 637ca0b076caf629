//! Service seam between the HTTP layer and whatever produces feed data.
//!
//! Every route calls exactly one [`Service`]. The implementations in this
//! module are in-memory stubs returning literal records; a persistence-backed
//! implementation only has to satisfy the same trait.

mod activities;
mod create_activity;
mod create_reply;
mod messages;

use std::sync::Arc;

use async_trait::async_trait;

use crate::activity::{Activity, Reply};
use crate::message::{Message, MessageGroup};
use crate::result::ServiceResult;

pub use activities::{
    HomeActivities, NotificationsActivities, SearchActivities, ShowActivity, UserActivities,
    SHOWCASE_ACTIVITY_UUID,
};
pub use create_activity::CreateActivity;
pub use create_reply::CreateReply;
pub use messages::{CreateMessage, MessageGroups, Messages};

/// A unit exposing a single `run` operation.
///
/// Conventional services use `Output = ServiceResult<T>`; the feed and
/// single-activity lookups return their payload directly.
#[async_trait]
pub trait Service: Send + Sync {
    type Params: Send + 'static;
    type Output: Send + 'static;

    async fn run(&self, params: Self::Params) -> Self::Output;
}

/// Shared, type-erased service handle.
pub type DynService<P, O> = Arc<dyn Service<Params = P, Output = O>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserActivitiesParams {
    pub user_handle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchActivitiesParams {
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateActivityParams {
    pub message: Option<String>,
    pub user_handle: Option<String>,
    pub ttl: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowActivityParams {
    pub activity_uuid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateReplyParams {
    pub message: Option<String>,
    pub user_handle: Option<String>,
    pub activity_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageGroupsParams {
    pub user_handle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessagesParams {
    pub user_sender_handle: Option<String>,
    pub user_receiver_handle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateMessageParams {
    pub message: Option<String>,
    pub user_sender_handle: Option<String>,
    pub user_receiver_handle: Option<String>,
}

/// Every service the route table dispatches to.
///
/// Cheap to clone; each field is an `Arc`.
#[derive(Clone)]
pub struct Services {
    pub home_activities: DynService<(), Vec<Activity>>,
    pub notifications_activities: DynService<(), Vec<Activity>>,
    pub user_activities: DynService<UserActivitiesParams, ServiceResult<Vec<Activity>>>,
    pub search_activities: DynService<SearchActivitiesParams, ServiceResult<Vec<Activity>>>,
    pub create_activity: DynService<CreateActivityParams, ServiceResult<Activity>>,
    pub show_activity: DynService<ShowActivityParams, Option<Activity>>,
    pub create_reply: DynService<CreateReplyParams, ServiceResult<Reply>>,
    pub message_groups: DynService<MessageGroupsParams, ServiceResult<Vec<MessageGroup>>>,
    pub messages: DynService<MessagesParams, ServiceResult<Vec<Message>>>,
    pub create_message: DynService<CreateMessageParams, ServiceResult<Message>>,
}

impl Services {
    /// The in-memory stub implementations.
    pub fn stub() -> Self {
        Self {
            home_activities: Arc::new(HomeActivities),
            notifications_activities: Arc::new(NotificationsActivities),
            user_activities: Arc::new(UserActivities),
            search_activities: Arc::new(SearchActivities),
            create_activity: Arc::new(CreateActivity),
            show_activity: Arc::new(ShowActivity),
            create_reply: Arc::new(CreateReply),
            message_groups: Arc::new(MessageGroups),
            messages: Arc::new(Messages),
            create_message: Arc::new(CreateMessage),
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::stub()
    }
}
