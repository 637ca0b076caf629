//! Direct-message services.

use async_trait::async_trait;
use chrono::Utc;
use uuid::{uuid, Uuid};

use super::{CreateMessageParams, MessageGroupsParams, MessagesParams, Service};
use crate::message::{Message, MessageGroup};
use crate::result::ServiceResult;
use crate::validation::{ValidationCode, Violations, MESSAGE_MAX_CHARS};

/// Conversations the caller takes part in.
pub struct MessageGroups;

#[async_trait]
impl Service for MessageGroups {
    type Params = MessageGroupsParams;
    type Output = ServiceResult<Vec<MessageGroup>>;

    async fn run(&self, params: MessageGroupsParams) -> ServiceResult<Vec<MessageGroup>> {
        let mut violations = Violations::new();
        violations.require(params.user_handle, ValidationCode::UserHandleBlank);
        if !violations.is_empty() {
            return ServiceResult::invalid(violations.into_strings());
        }

        let now = Utc::now();
        ServiceResult::ok(vec![
            MessageGroup {
                uuid: uuid!("24b95582-9e7b-4e0a-9ad1-639773ab7552"),
                display_name: "Andrew Brown".into(),
                handle: "andrewbrown".into(),
                created_at: now,
            },
            MessageGroup {
                uuid: uuid!("417c360e-c4e6-4fce-873b-d2d71469b4ac"),
                display_name: "Worf".into(),
                handle: "worf".into(),
                created_at: now,
            },
        ])
    }
}

/// The conversation between sender and receiver.
pub struct Messages;

#[async_trait]
impl Service for Messages {
    type Params = MessagesParams;
    type Output = ServiceResult<Vec<Message>>;

    async fn run(&self, params: MessagesParams) -> ServiceResult<Vec<Message>> {
        let mut violations = Violations::new();
        violations.require(params.user_sender_handle, ValidationCode::UserSenderHandleBlank);
        violations.require(
            params.user_receiver_handle,
            ValidationCode::UserReceiverHandleBlank,
        );
        if !violations.is_empty() {
            return ServiceResult::invalid(violations.into_strings());
        }

        let now = Utc::now();
        ServiceResult::ok(vec![
            Message {
                uuid: uuid!("4e81c06a-db0f-4281-b4cc-98208537772a"),
                display_name: "Andrew Brown".into(),
                handle: "andrewbrown".into(),
                message: "Cloud is fun!".into(),
                created_at: now,
            },
            Message {
                uuid: uuid!("66e12864-8c26-4c3a-9658-95a10f8fea67"),
                display_name: "Andrew Brown".into(),
                handle: "andrewbrown".into(),
                message: "This platform is great!".into(),
                created_at: now,
            },
        ])
    }
}

/// Sends a direct message.
pub struct CreateMessage;

#[async_trait]
impl Service for CreateMessage {
    type Params = CreateMessageParams;
    type Output = ServiceResult<Message>;

    async fn run(&self, params: CreateMessageParams) -> ServiceResult<Message> {
        let mut violations = Violations::new();
        let sender =
            violations.require(params.user_sender_handle, ValidationCode::UserSenderHandleBlank);
        let receiver = violations.require(
            params.user_receiver_handle,
            ValidationCode::UserReceiverHandleBlank,
        );
        let message = violations.message_body(params.message, MESSAGE_MAX_CHARS);

        let (Some(sender), Some(_receiver), Some(message)) = (sender, receiver, message) else {
            return ServiceResult::invalid(violations.into_strings());
        };

        ServiceResult::ok(Message {
            uuid: Uuid::new_v4(),
            display_name: "Andrew Brown".into(),
            handle: sender,
            message,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn message_groups_for_current_user() {
        let result = MessageGroups
            .run(MessageGroupsParams {
                user_handle: Some("andrewbrown".into()),
            })
            .await;
        let groups = result.data.unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].handle, "worf");
    }

    #[tokio::test]
    async fn messages_require_both_parties() {
        let result = Messages
            .run(MessagesParams {
                user_sender_handle: Some("andrewbrown".into()),
                user_receiver_handle: None,
            })
            .await;
        assert_eq!(result.errors, ["user_receiver_handle_blank"]);
    }

    #[tokio::test]
    async fn create_message_is_attributed_to_sender() {
        let result = CreateMessage
            .run(CreateMessageParams {
                message: Some("Today is a good day to die".into()),
                user_sender_handle: Some("worf".into()),
                user_receiver_handle: Some("andrewbrown".into()),
            })
            .await;
        let message = result.data.unwrap();
        assert_eq!(message.handle, "worf");
        assert_eq!(message.message, "Today is a good day to die");
    }

    #[tokio::test]
    async fn create_message_rejects_empty_receiver() {
        let result = CreateMessage
            .run(CreateMessageParams {
                message: Some("Qapla'".into()),
                user_sender_handle: Some("worf".into()),
                user_receiver_handle: Some(String::new()),
            })
            .await;
        assert_eq!(result.errors, ["user_receiver_handle_blank"]);
        assert!(result.data.is_none());
    }

    #[tokio::test]
    async fn create_message_rejects_oversized_body() {
        let result = CreateMessage
            .run(CreateMessageParams {
                message: Some("z".repeat(1025)),
                user_sender_handle: Some("worf".into()),
                user_receiver_handle: None,
            })
            .await;
        assert_eq!(
            result.errors,
            ["user_receiver_handle_blank", "message_exceed_max_chars"]
        );
    }
}
