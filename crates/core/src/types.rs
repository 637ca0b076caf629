/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A user handle such as `andrewbrown`. Free text; no normalization.
pub type Handle = String;
