use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{CreateReplyParams, Service};
use crate::activity::{Counts, Reply};
use crate::result::ServiceResult;
use crate::validation::{ValidationCode, Violations, MESSAGE_MAX_CHARS};

/// Replies to an existing activity.
///
/// The parent id is not looked up; any non-blank value is accepted.
pub struct CreateReply;

#[async_trait]
impl Service for CreateReply {
    type Params = CreateReplyParams;
    type Output = ServiceResult<Reply>;

    async fn run(&self, params: CreateReplyParams) -> ServiceResult<Reply> {
        let mut violations = Violations::new();
        let handle = violations.require(params.user_handle, ValidationCode::UserHandleBlank);
        let reply_to = violations.require(params.activity_uuid, ValidationCode::ActivityUuidBlank);
        let message = violations.message_body(params.message, MESSAGE_MAX_CHARS);

        let (Some(handle), Some(reply_to), Some(message)) = (handle, reply_to, message) else {
            return ServiceResult::invalid(violations.into_strings());
        };

        ServiceResult::ok(Reply {
            uuid: Uuid::new_v4(),
            reply_to_activity_uuid: Some(reply_to),
            handle,
            display_name: Some("Andrew Brown".into()),
            message,
            created_at: Utc::now(),
            counts: Counts::default(),
        })
    }
}
