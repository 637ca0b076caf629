//! Input checks shared by the create/list services.
//!
//! Each failed check becomes a [`ValidationCode`] whose `Display` output is
//! the exact string relayed to clients.

/// Maximum length of an activity body, in characters.
pub const ACTIVITY_MAX_CHARS: usize = 280;

/// Maximum length of a reply or direct message body, in characters.
pub const MESSAGE_MAX_CHARS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationCode {
    #[error("ttl_blank")]
    TtlBlank,
    #[error("user_handle_blank")]
    UserHandleBlank,
    #[error("message_blank")]
    MessageBlank,
    #[error("message_exceed_max_chars")]
    MessageExceedMaxChars,
    #[error("activity_uuid_blank")]
    ActivityUuidBlank,
    #[error("search_term_blank")]
    SearchTermBlank,
    #[error("user_sender_handle_blank")]
    UserSenderHandleBlank,
    #[error("user_receiver_handle_blank")]
    UserReceiverHandleBlank,
}

/// `None` and `""` are both blank.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Ordered accumulator of failed checks.
#[derive(Debug, Default)]
pub struct Violations {
    codes: Vec<ValidationCode>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, code: ValidationCode) {
        self.codes.push(code);
    }

    /// Pass `value` through when it is not blank. Otherwise record `code`
    /// and return `None`.
    pub fn require(&mut self, value: Option<String>, code: ValidationCode) -> Option<String> {
        if is_blank(value.as_deref()) {
            self.push(code);
            return None;
        }
        value
    }

    /// Pass a message body through, or record `message_blank` /
    /// `message_exceed_max_chars` and return `None`.
    pub fn message_body(&mut self, message: Option<String>, max_chars: usize) -> Option<String> {
        match message {
            None => self.push(ValidationCode::MessageBlank),
            Some(text) if text.is_empty() => self.push(ValidationCode::MessageBlank),
            Some(text) if text.chars().count() > max_chars => {
                self.push(ValidationCode::MessageExceedMaxChars);
            }
            Some(text) => return Some(text),
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn codes(&self) -> &[ValidationCode] {
        &self.codes
    }

    /// Wire strings, in the order the checks failed.
    pub fn into_strings(self) -> Vec<String> {
        self.codes.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_render_as_wire_strings() {
        assert_eq!(ValidationCode::TtlBlank.to_string(), "ttl_blank");
        assert_eq!(
            ValidationCode::MessageExceedMaxChars.to_string(),
            "message_exceed_max_chars"
        );
    }

    #[test]
    fn blank_covers_missing_and_empty() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(!is_blank(Some(" ")));
    }

    #[test]
    fn message_length_counts_characters_not_bytes() {
        let mut violations = Violations::new();
        // 280 four-byte characters is within limit.
        let body = violations.message_body(Some("🦀".repeat(ACTIVITY_MAX_CHARS)), ACTIVITY_MAX_CHARS);
        assert!(violations.is_empty());
        assert_eq!(body.map(|b| b.chars().count()), Some(ACTIVITY_MAX_CHARS));

        let body = violations.message_body(Some("a".repeat(ACTIVITY_MAX_CHARS + 1)), ACTIVITY_MAX_CHARS);
        assert!(body.is_none());
        assert_eq!(violations.codes(), [ValidationCode::MessageExceedMaxChars]);
    }

    #[test]
    fn preserves_check_order() {
        let mut violations = Violations::new();
        violations.require(None, ValidationCode::TtlBlank);
        let handle = violations.require(Some("andrewbrown".into()), ValidationCode::UserHandleBlank);
        assert_eq!(handle.as_deref(), Some("andrewbrown"));
        violations.message_body(None, MESSAGE_MAX_CHARS);
        assert_eq!(violations.into_strings(), ["ttl_blank", "message_blank"]);
    }
}
