pub mod activities;
pub mod messages;

/// Split a `@handle` path segment. Returns `None` when the `@` is missing.
///
/// `"@"` alone yields `Some("")`, leaving the blank check to the service.
pub(crate) fn handle_segment(segment: &str) -> Option<&str> {
    segment.strip_prefix('@')
}
