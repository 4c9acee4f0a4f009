//! Pure input predicates enforcing the service's structural constraints.
//!
//! Every check runs before a request is built; a failure here never reaches
//! the transport.

use crate::error::ValidationError;
use crate::message::attributes;

/// Longest accepted queue name, in characters
pub const MAX_QUEUE_NAME_LENGTH: usize = 80;

/// Largest accepted visibility timeout, in seconds
pub const MAX_VISIBILITY_TIMEOUT: u32 = 7200;

/// Largest accepted message body, in bytes
pub const MAX_MESSAGE_BYTES: usize = 8000;

/// Attribute names the service accepts in set operations
const WRITABLE_ATTRIBUTES: &[&str] = &[attributes::VISIBILITY_TIMEOUT];

/// Validate a queue name: 1-80 ASCII alphanumeric, hyphen, or underscore
/// characters.
pub fn queue_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() || name.len() > MAX_QUEUE_NAME_LENGTH {
        return Err(ValidationError::OutOfRange {
            field: "queue_name".to_string(),
            message: format!("must be 1-{} characters", MAX_QUEUE_NAME_LENGTH),
        });
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "queue_name".to_string(),
            message: "only ASCII alphanumeric, hyphens, and underscores allowed".to_string(),
        });
    }

    Ok(())
}

/// Validate a visibility timeout: 0-7200 seconds inclusive.
pub fn visibility_timeout(seconds: u32) -> Result<(), ValidationError> {
    if seconds > MAX_VISIBILITY_TIMEOUT {
        return Err(ValidationError::OutOfRange {
            field: "visibility_timeout".to_string(),
            message: format!("must be 0-{} seconds", MAX_VISIBILITY_TIMEOUT),
        });
    }

    Ok(())
}

/// Validate a message body: at most 8000 bytes.
pub fn message_body(body: &str) -> Result<(), ValidationError> {
    if body.len() > MAX_MESSAGE_BYTES {
        return Err(ValidationError::OutOfRange {
            field: "message_body".to_string(),
            message: format!("exceeds maximum length of {} bytes", MAX_MESSAGE_BYTES),
        });
    }

    Ok(())
}

/// Validate an attribute name and value for a set operation.
///
/// Only names in the service-defined writable set are accepted; today that
/// set is `VisibilityTimeout`, whose value must be a timeout in seconds.
pub fn attribute(name: &str, value: &str) -> Result<(), ValidationError> {
    if !WRITABLE_ATTRIBUTES.contains(&name) {
        return Err(ValidationError::InvalidFormat {
            field: "attribute_name".to_string(),
            message: format!("'{}' is not a settable attribute", name),
        });
    }

    let seconds: u32 = value.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "attribute_value".to_string(),
        message: "must be an integer number of seconds".to_string(),
    })?;

    visibility_timeout(seconds)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
