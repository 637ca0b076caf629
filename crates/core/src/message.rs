//! Direct messages and the conversations (groups) they belong to.

use serde::Serialize;
use uuid::Uuid;

use crate::types::{Handle, Timestamp};

/// One conversation in the caller's inbox.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageGroup {
    pub uuid: Uuid,
    pub display_name: String,
    pub handle: Handle,
    pub created_at: Timestamp,
}

/// A single direct message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub uuid: Uuid,
    pub display_name: String,
    pub handle: Handle,
    pub message: String,
    pub created_at: Timestamp,
}
