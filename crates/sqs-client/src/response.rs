//! HTTP response model and service-error detection.

use crate::error::SqsError;
use crate::scan;
use crate::transport::{RawResponse, TransportError};
use std::collections::HashMap;

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;

/// An application-level error envelope reported by the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    pub code: String,
    pub message: String,
}

/// A parsed HTTP response plus the transport-failure flag.
///
/// Constructed once per call and never mutated afterwards. When
/// `failed()` is true the status, headers, and body are meaningless and the
/// body is never scanned for service errors.
#[derive(Debug, Clone)]
pub struct ServiceResponse {
    http_version: String,
    status_code: u16,
    status_text: String,
    headers: HashMap<String, String>,
    body: String,
    transport_failed: bool,
    transport_error: Option<String>,
}

impl ServiceResponse {
    /// Wrap a transport outcome into a normalized response.
    ///
    /// A transport failure yields a degraded response with the error text
    /// retained; a streamed-elsewhere marker yields a synthetic `200 OK`
    /// with no headers or body.
    ///
    /// # Errors
    ///
    /// Returns [`SqsError::Protocol`] when raw text was returned but its
    /// status line cannot be parsed. This aborts only the affected call.
    pub fn from_transport(outcome: Result<RawResponse, TransportError>) -> Result<Self, SqsError> {
        match outcome {
            Err(error) => Ok(Self::from_failure(error.to_string())),
            Ok(RawResponse::Streamed) => Ok(Self::streamed()),
            Ok(RawResponse::Text(raw)) => Self::parse(&raw),
        }
    }

    /// Degraded response for a request that never produced a response
    fn from_failure(message: String) -> Self {
        Self {
            http_version: String::new(),
            status_code: 0,
            status_text: String::new(),
            headers: HashMap::new(),
            body: String::new(),
            transport_failed: true,
            transport_error: Some(message),
        }
    }

    /// Synthetic success for a response whose body went elsewhere
    fn streamed() -> Self {
        Self {
            http_version: String::new(),
            status_code: 200,
            status_text: "OK".to_string(),
            headers: HashMap::new(),
            body: String::new(),
            transport_failed: false,
            transport_error: None,
        }
    }

    /// Parse raw response text: headers and body split on the first blank
    /// line, status line split into version/code/text, header lines split
    /// on the first colon-space.
    ///
    /// Duplicate header names are not supported; the last occurrence wins.
    pub fn parse(raw: &str) -> Result<Self, SqsError> {
        let (head, body) = match raw.split_once("\r\n\r\n") {
            Some((head, body)) => (head, body),
            None => raw.split_once("\n\n").unwrap_or((raw, "")),
        };

        let mut lines = head.lines();
        let status_line = lines.next().unwrap_or("");
        let mut parts = status_line.splitn(3, ' ');

        let http_version = match parts.next() {
            Some(version) if !version.is_empty() => version.to_string(),
            _ => {
                return Err(SqsError::Protocol {
                    message: "response is missing its status line".to_string(),
                })
            }
        };
        let status_code = parts
            .next()
            .and_then(|code| code.parse::<u16>().ok())
            .ok_or_else(|| SqsError::Protocol {
                message: format!("malformed status line: '{}'", status_line),
            })?;
        let status_text = parts.next().unwrap_or("").to_string();

        let mut headers = HashMap::new();
        for line in lines {
            if let Some((name, value)) = line.split_once(": ") {
                headers.insert(name.to_string(), value.to_string());
            }
        }

        Ok(Self {
            http_version,
            status_code,
            status_text,
            headers,
            body: body.to_string(),
            transport_failed: false,
            transport_error: None,
        })
    }

    /// HTTP protocol version from the status line
    pub fn http_version(&self) -> &str {
        &self.http_version
    }

    /// HTTP status code
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// HTTP status message
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Value of a response header, if present
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Raw response body
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether the request failed at the transport level
    pub fn failed(&self) -> bool {
        self.transport_failed
    }

    /// Transport error text, when the request failed before a response
    pub fn transport_error(&self) -> Option<&str> {
        self.transport_error.as_deref()
    }

    /// The service's error envelope, when the body carries one.
    ///
    /// Always `None` for a transport failure - a failed exchange has no
    /// meaningful body to scan.
    pub fn service_error(&self) -> Option<ServiceError> {
        if self.transport_failed {
            return None;
        }

        scan::error_envelope(&self.body)
    }

    /// Classify this response as success or failure.
    ///
    /// A transport failure is always a failure. Otherwise the body is
    /// scanned for an embedded error envelope - the single point where an
    /// HTTP success carrying an application error becomes a client-visible
    /// failure.
    pub fn ensure_ok(&self) -> Result<(), SqsError> {
        if self.transport_failed {
            return Err(SqsError::Transport {
                message: self
                    .transport_error
                    .clone()
                    .unwrap_or_else(|| "request failed".to_string()),
            });
        }

        if let Some(error) = scan::error_envelope(&self.body) {
            return Err(SqsError::Service {
                code: error.code,
                message: error.message,
            });
        }

        Ok(())
    }
}
