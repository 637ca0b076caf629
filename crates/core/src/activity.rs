//! Feed entities: activities and their replies.

use serde::Serialize;
use uuid::Uuid;

use crate::types::{Handle, Timestamp};

/// A post in someone's feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub uuid: Uuid,
    pub handle: Handle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub message: String,
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,
    #[serde(flatten)]
    pub counts: Counts,
    pub replies: Vec<Reply>,
}

/// A reply attached to an activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub uuid: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_activity_uuid: Option<String>,
    pub handle: Handle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub message: String,
    pub created_at: Timestamp,
    #[serde(flatten)]
    pub counts: Counts,
}

/// Engagement counters. Omitted from the wire when unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replies_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reposts_count: Option<u32>,
}

impl Counts {
    pub fn new(likes: u32, replies: u32, reposts: u32) -> Self {
        Self {
            likes_count: Some(likes),
            replies_count: Some(replies),
            reposts_count: Some(reposts),
        }
    }
}
