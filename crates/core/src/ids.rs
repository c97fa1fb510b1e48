//! Event-id format rule.
//!
//! Event ids are opaque strings supplied by clients in route parameters and
//! generated as UUIDs on create. The accepted format is deliberately loose:
//! 1 to 64 characters drawn from letters, digits, `.`, `_` and `-`.

use std::borrow::Cow;

use validator::ValidationError;

/// Maximum accepted length for an event id.
pub const MAX_EVENT_ID_LEN: usize = 64;

/// Whether `id` satisfies the event-id format.
pub fn is_valid_event_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_EVENT_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

/// `validator` hook for the event-id format, usable in
/// `#[validate(custom(function = ...))]` attributes on request DTOs.
pub fn validate_event_id(id: &str) -> Result<(), ValidationError> {
    if is_valid_event_id(id) {
        Ok(())
    } else {
        Err(ValidationError::new("event_id_format").with_message(Cow::Borrowed(
            "event id must be 1-64 characters of letters, digits, '.', '_' or '-'",
        )))
    }
}
