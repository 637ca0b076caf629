use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{CreateActivityParams, Service};
use crate::activity::{Activity, Counts};
use crate::result::ServiceResult;
use crate::ttl::Ttl;
use crate::validation::{ValidationCode, Violations, ACTIVITY_MAX_CHARS};

/// Posts a new activity on behalf of `user_handle`.
///
/// Checks run in a fixed order (ttl, handle, message) and the resulting
/// codes are reported in that order.
pub struct CreateActivity;

#[async_trait]
impl Service for CreateActivity {
    type Params = CreateActivityParams;
    type Output = ServiceResult<Activity>;

    async fn run(&self, params: CreateActivityParams) -> ServiceResult<Activity> {
        let mut violations = Violations::new();

        let ttl = params.ttl.as_deref().and_then(|raw| raw.parse::<Ttl>().ok());
        if ttl.is_none() {
            violations.push(ValidationCode::TtlBlank);
        }
        let handle = violations.require(params.user_handle, ValidationCode::UserHandleBlank);
        let message = violations.message_body(params.message, ACTIVITY_MAX_CHARS);

        // Every `None` here has a matching violation.
        let (Some(ttl), Some(handle), Some(message)) = (ttl, handle, message) else {
            return ServiceResult::invalid(violations.into_strings());
        };

        let now = Utc::now();
        ServiceResult::ok(Activity {
            uuid: Uuid::new_v4(),
            display_name: Some("Andrew Brown".into()),
            handle,
            message,
            created_at: now,
            expires_at: Some(now + ttl.duration()),
            counts: Counts::default(),
            replies: Vec::new(),
        })
    }
}
