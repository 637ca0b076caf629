//! Read-side activity services backed by literal records.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::{uuid, Uuid};

use super::{SearchActivitiesParams, Service, ShowActivityParams, UserActivitiesParams};
use crate::activity::{Activity, Counts, Reply};
use crate::result::ServiceResult;
use crate::types::Timestamp;
use crate::validation::{ValidationCode, Violations};

/// The one activity [`ShowActivity`] knows about.
pub const SHOWCASE_ACTIVITY_UUID: Uuid = uuid!("68f126b0-1ceb-4a33-88be-d90fa7109eee");

const WORF_REPLY_UUID: Uuid = uuid!("26e12864-1c26-5c3a-9658-97a10f8fea67");
const PRUNE_JUICE_UUID: Uuid = uuid!("66e12864-8c26-4c3a-9658-95a10f8fea67");
const TAILOR_UUID: Uuid = uuid!("248959df-3079-4947-b847-9e0892d1bab4");

fn worf_reply(now: Timestamp, reply_to: Option<Uuid>, counts: Counts) -> Reply {
    Reply {
        uuid: WORF_REPLY_UUID,
        reply_to_activity_uuid: reply_to.map(|id| id.to_string()),
        handle: "Worf".into(),
        display_name: None,
        message: "This post has no honor!".into(),
        created_at: now - Duration::days(2),
        counts,
    }
}

fn cloud_is_fun(now: Timestamp, handle: &str, message: &str) -> Activity {
    Activity {
        uuid: SHOWCASE_ACTIVITY_UUID,
        handle: handle.into(),
        display_name: None,
        message: message.into(),
        created_at: now - Duration::days(2),
        expires_at: Some(now + Duration::days(5)),
        counts: Counts::new(5, 1, 0),
        replies: vec![worf_reply(
            now,
            Some(SHOWCASE_ACTIVITY_UUID),
            Counts::new(0, 0, 0),
        )],
    }
}

/// The caller's home timeline.
pub struct HomeActivities;

#[async_trait]
impl Service for HomeActivities {
    type Params = ();
    type Output = Vec<Activity>;

    async fn run(&self, _params: ()) -> Vec<Activity> {
        let now = Utc::now();
        vec![
            cloud_is_fun(now, "Andrew Brown", "Cloud is fun!"),
            Activity {
                uuid: PRUNE_JUICE_UUID,
                handle: "Worf".into(),
                display_name: None,
                message: "I am out of prune juice".into(),
                created_at: now - Duration::days(7),
                expires_at: Some(now + Duration::days(9)),
                counts: Counts {
                    likes_count: Some(0),
                    ..Counts::default()
                },
                replies: Vec::new(),
            },
            Activity {
                uuid: TAILOR_UUID,
                handle: "Garek".into(),
                display_name: None,
                message: "My dear doctor, I am just simple tailor. I am not a spy.".into(),
                created_at: now - Duration::hours(2),
                expires_at: Some(now + Duration::hours(12)),
                counts: Counts {
                    likes_count: Some(0),
                    ..Counts::default()
                },
                replies: Vec::new(),
            },
        ]
    }
}

/// Activity that mentions or replies to the caller.
pub struct NotificationsActivities;

#[async_trait]
impl Service for NotificationsActivities {
    type Params = ();
    type Output = Vec<Activity>;

    async fn run(&self, _params: ()) -> Vec<Activity> {
        vec![cloud_is_fun(Utc::now(), "coco", "I am white unicorn")]
    }
}

/// One user's own posts.
pub struct UserActivities;

#[async_trait]
impl Service for UserActivities {
    type Params = UserActivitiesParams;
    type Output = ServiceResult<Vec<Activity>>;

    async fn run(&self, params: UserActivitiesParams) -> ServiceResult<Vec<Activity>> {
        let mut violations = Violations::new();
        violations.require(params.user_handle, ValidationCode::UserHandleBlank);
        if !violations.is_empty() {
            return ServiceResult::invalid(violations.into_strings());
        }

        let now = Utc::now();
        ServiceResult::ok(vec![Activity {
            uuid: TAILOR_UUID,
            handle: "Andrew Brown".into(),
            display_name: None,
            message: "Cloud is fun!".into(),
            created_at: now - Duration::days(1),
            expires_at: Some(now + Duration::days(31)),
            counts: Counts::default(),
            replies: Vec::new(),
        }])
    }
}

/// Full-text search over activities.
pub struct SearchActivities;

#[async_trait]
impl Service for SearchActivities {
    type Params = SearchActivitiesParams;
    type Output = ServiceResult<Vec<Activity>>;

    async fn run(&self, params: SearchActivitiesParams) -> ServiceResult<Vec<Activity>> {
        let mut violations = Violations::new();
        violations.require(params.search_term, ValidationCode::SearchTermBlank);
        if !violations.is_empty() {
            return ServiceResult::invalid(violations.into_strings());
        }

        ServiceResult::ok(vec![Activity {
            uuid: TAILOR_UUID,
            handle: "Andrew Brown".into(),
            display_name: None,
            message: "Cloud is fun!".into(),
            created_at: Utc::now(),
            expires_at: None,
            counts: Counts::default(),
            replies: Vec::new(),
        }])
    }
}

/// Single-activity lookup. Unknown ids yield `None`, not an error.
pub struct ShowActivity;

#[async_trait]
impl Service for ShowActivity {
    type Params = ShowActivityParams;
    type Output = Option<Activity>;

    async fn run(&self, params: ShowActivityParams) -> Option<Activity> {
        let now = Utc::now();
        let activities = [Activity {
            uuid: SHOWCASE_ACTIVITY_UUID,
            handle: "Andrew Brown".into(),
            display_name: None,
            message: "Cloud is fun!".into(),
            created_at: now - Duration::days(2),
            expires_at: Some(now + Duration::days(5)),
            counts: Counts::default(),
            replies: vec![worf_reply(now, None, Counts::default())],
        }];

        activities
            .into_iter()
            .find(|activity| activity.uuid.to_string() == params.activity_uuid)
    }
}
