//! Tests for the response model and service-error detection.

use super::*;
use crate::error::SqsError;
use crate::transport::{RawResponse, TransportError};

const SUCCESS_BODY: &str = "<CreateQueueResponse><CreateQueueResult>\
    <QueueUrl>http://queue.amazonaws.com/unittest-1</QueueUrl>\
    </CreateQueueResult></CreateQueueResponse>";

fn raw_ok(body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/xml\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    )
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_splits_status_headers_and_body() {
    let response = ServiceResponse::parse(&raw_ok(SUCCESS_BODY)).unwrap();

    assert_eq!(response.http_version(), "HTTP/1.1");
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.status_text(), "OK");
    assert_eq!(response.header("Content-Type"), Some("text/xml"));
    assert_eq!(response.body(), SUCCESS_BODY);
    assert!(!response.failed());
}

#[test]
fn test_parse_multi_word_status_text() {
    let response = ServiceResponse::parse("HTTP/1.1 500 Internal Server Error\r\n\r\n").unwrap();

    assert_eq!(response.status_code(), 500);
    assert_eq!(response.status_text(), "Internal Server Error");
}

#[test]
fn test_parse_without_blank_line_leaves_body_empty() {
    let response =
        ServiceResponse::parse("HTTP/1.1 200 OK\r\nContent-Type: text/xml").unwrap();

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.body(), "");
}

#[test]
fn test_parse_accepts_bare_newline_separators() {
    let response = ServiceResponse::parse("HTTP/1.1 200 OK\nServer: test\n\n<Body/>").unwrap();

    assert_eq!(response.header("Server"), Some("test"));
    assert_eq!(response.body(), "<Body/>");
}

#[test]
fn test_parse_last_duplicate_header_wins() {
    let raw = "HTTP/1.1 200 OK\r\nX-Token: first\r\nX-Token: second\r\n\r\n";

    let response = ServiceResponse::parse(raw).unwrap();
    assert_eq!(response.header("X-Token"), Some("second"));
}

#[test]
fn test_parse_rejects_malformed_status_line() {
    let result = ServiceResponse::parse("not an http response at all");

    assert!(matches!(result, Err(SqsError::Protocol { .. })));
}

#[test]
fn test_parse_rejects_empty_input() {
    assert!(ServiceResponse::parse("").is_err());
}

// ============================================================================
// Transport Outcomes
// ============================================================================

#[test]
fn test_transport_failure_yields_degraded_response() {
    let outcome = Err(TransportError::Timeout {
        message: "request timed out after 10s".to_string(),
    });

    let response = ServiceResponse::from_transport(outcome).unwrap();
    assert!(response.failed());
    assert_eq!(response.status_code(), 0);
    assert!(response
        .transport_error()
        .unwrap()
        .contains("request timed out"));
}

#[test]
fn test_streamed_marker_yields_synthetic_success() {
    let response = ServiceResponse::from_transport(Ok(RawResponse::Streamed)).unwrap();

    assert!(!response.failed());
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.status_text(), "OK");
    assert_eq!(response.body(), "");
    assert!(response.ensure_ok().is_ok());
}

#[test]
fn test_raw_text_outcome_is_parsed() {
    let response =
        ServiceResponse::from_transport(Ok(RawResponse::Text(raw_ok(SUCCESS_BODY)))).unwrap();

    assert_eq!(response.body(), SUCCESS_BODY);
}

// ============================================================================
// Error Detection
// ============================================================================

#[test]
fn test_ensure_ok_on_success_body() {
    let response = ServiceResponse::parse(&raw_ok(SUCCESS_BODY)).unwrap();

    assert!(response.ensure_ok().is_ok());
    assert!(response.service_error().is_none());
}

#[test]
fn test_ensure_ok_surfaces_embedded_error_envelope() {
    // HTTP 200 with an application-level error in the body
    let body = "<ErrorResponse><Error><Code>InvalidParameter</Code>\
                <Message>bad</Message></Error></ErrorResponse>";
    let response = ServiceResponse::parse(&raw_ok(body)).unwrap();

    let error = response.ensure_ok().unwrap_err();
    match error {
        SqsError::Service { code, message } => {
            assert_eq!(code, "InvalidParameter");
            assert_eq!(message, "bad");
        }
        other => panic!("Expected Service error, got: {:?}", other),
    }

    let envelope = response.service_error().unwrap();
    assert_eq!(envelope.code, "InvalidParameter");
}

#[test]
fn test_ensure_ok_on_transport_failure_never_scans_body() {
    let outcome = Err(TransportError::Connection {
        message: "connection refused".to_string(),
    });
    let response = ServiceResponse::from_transport(outcome).unwrap();

    assert!(response.service_error().is_none());
    let error = response.ensure_ok().unwrap_err();
    match error {
        SqsError::Transport { message } => assert!(message.contains("connection refused")),
        other => panic!("Expected Transport error, got: {:?}", other),
    }
}
