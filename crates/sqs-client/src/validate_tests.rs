//! Tests for local input validation.

use super::*;
use crate::error::ValidationError;

// ============================================================================
// Queue Names
// ============================================================================

#[test]
fn test_queue_name_accepts_valid_names() {
    assert!(queue_name("unittest-test-queue-one").is_ok());
    assert!(queue_name("Queue_2").is_ok());
    assert!(queue_name("a").is_ok());
    assert!(queue_name(&"q".repeat(80)).is_ok());
}

#[test]
fn test_queue_name_rejects_empty() {
    assert!(matches!(
        queue_name(""),
        Err(ValidationError::OutOfRange { .. })
    ));
}

#[test]
fn test_queue_name_rejects_overlong() {
    assert!(matches!(
        queue_name(&"q".repeat(81)),
        Err(ValidationError::OutOfRange { .. })
    ));
}

#[test]
fn test_queue_name_rejects_illegal_characters() {
    for name in ["bad name", "queue.one", "queue!", "queue/one", "ütf-queue"] {
        assert!(
            matches!(queue_name(name), Err(ValidationError::InvalidFormat { .. })),
            "'{}' should be rejected",
            name
        );
    }
}

// ============================================================================
// Visibility Timeouts
// ============================================================================

#[test]
fn test_visibility_timeout_accepts_bounds() {
    assert!(visibility_timeout(0).is_ok());
    assert!(visibility_timeout(30).is_ok());
    assert!(visibility_timeout(7200).is_ok());
}

#[test]
fn test_visibility_timeout_rejects_beyond_maximum() {
    assert!(matches!(
        visibility_timeout(7201),
        Err(ValidationError::OutOfRange { .. })
    ));
    assert!(visibility_timeout(10000).is_err());
}

// ============================================================================
// Message Bodies
// ============================================================================

#[test]
fn test_message_body_accepts_up_to_limit() {
    assert!(message_body("").is_ok());
    assert!(message_body("Sample message right here, folks!").is_ok());
    assert!(message_body(&"m".repeat(8000)).is_ok());
}

#[test]
fn test_message_body_rejects_oversized() {
    assert!(matches!(
        message_body(&"m".repeat(8001)),
        Err(ValidationError::OutOfRange { .. })
    ));
}

#[test]
fn test_message_body_limit_counts_bytes_not_chars() {
    // 4000 three-byte characters exceed the 8000-byte limit
    let body = "\u{20AC}".repeat(4000);

    assert!(message_body(&body).is_err());
}

// ============================================================================
// Attributes
// ============================================================================

#[test]
fn test_attribute_accepts_visibility_timeout() {
    assert!(attribute("VisibilityTimeout", "200").is_ok());
    assert!(attribute("VisibilityTimeout", "0").is_ok());
    assert!(attribute("VisibilityTimeout", "7200").is_ok());
}

#[test]
fn test_attribute_rejects_unknown_names() {
    assert!(matches!(
        attribute("InvalidAttributeName", "1"),
        Err(ValidationError::InvalidFormat { .. })
    ));
    // Read-only attributes are not settable either
    assert!(attribute("ApproximateNumberOfMessages", "1").is_err());
}

#[test]
fn test_attribute_rejects_out_of_range_values() {
    assert!(matches!(
        attribute("VisibilityTimeout", "10000"),
        Err(ValidationError::OutOfRange { .. })
    ));
}

#[test]
fn test_attribute_rejects_non_numeric_values() {
    assert!(attribute("VisibilityTimeout", "soon").is_err());
    assert!(attribute("VisibilityTimeout", "-1").is_err());
}
