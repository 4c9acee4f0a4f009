//! Tests for error types and retry classification.

use super::*;
use chrono::Duration;

#[test]
fn test_transport_errors_are_transient() {
    let error = SqsError::Transport {
        message: "connection reset".to_string(),
    };

    assert!(error.is_transient());
    assert!(error.should_retry());
    assert_eq!(error.retry_after(), Some(Duration::seconds(5)));
}

#[test]
fn test_validation_errors_are_not_transient() {
    let error = SqsError::Validation(ValidationError::OutOfRange {
        field: "visibility_timeout".to_string(),
        message: "must be 0-7200 seconds".to_string(),
    });

    assert!(!error.is_transient());
    assert!(!error.should_retry());
    assert_eq!(error.retry_after(), None);
}

#[test]
fn test_protocol_errors_are_not_transient() {
    let error = SqsError::Protocol {
        message: "malformed status line".to_string(),
    };

    assert!(!error.is_transient());
    assert_eq!(error.retry_after(), None);
}

#[test]
fn test_service_error_exposes_code() {
    let error = SqsError::Service {
        code: "InvalidParameter".to_string(),
        message: "bad".to_string(),
    };

    assert_eq!(error.code(), Some("InvalidParameter"));
    assert_eq!(
        error.to_string(),
        "Service error (InvalidParameter): bad"
    );
}

#[test]
fn test_non_service_errors_have_no_code() {
    let error = SqsError::Transport {
        message: "timeout".to_string(),
    };

    assert_eq!(error.code(), None);
}

#[test]
fn test_validation_error_converts_to_sqs_error() {
    let validation = ValidationError::Required {
        field: "queue_url".to_string(),
    };

    let error: SqsError = validation.into();
    assert!(matches!(error, SqsError::Validation(_)));
}

#[test]
fn test_configuration_error_display() {
    let error = ConfigurationError::Parsing {
        message: "missing field `secret_key`".to_string(),
    };

    assert!(error.to_string().contains("missing field `secret_key`"));
}
