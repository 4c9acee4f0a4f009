//! HTTP transport seam and implementations.
//!
//! The protocol layer only needs a GET that returns the full header and
//! body text of the exchange. Keeping that behind a trait lets unit tests
//! drive the clients with canned responses and keeps retry and cancellation
//! policy with the caller.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;

/// Bound on a single request round trip
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Raw outcome of a transport-level exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawResponse {
    /// Full header and body text of the HTTP exchange
    Text(String),
    /// The transport completed but the body was streamed elsewhere
    Streamed,
}

/// Transport-level failures, distinct from service-reported errors
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("Request timed out: {message}")]
    Timeout { message: String },

    #[error("Connection failed: {message}")]
    Connection { message: String },

    #[error("HTTP request failed: {message}")]
    Http { message: String },
}

/// Interface to the external HTTP transport issuing GET requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET and return the raw response text or a transport failure
    async fn invoke(&self, url: &str, timeout: Duration) -> Result<RawResponse, TransportError>;
}

// ============================================================================
// Reqwest Transport
// ============================================================================

/// Production transport backed by a reqwest client.
///
/// Follows redirects and reassembles the response into the raw
/// status-line/header/body text the response model parses.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create the transport with redirect following and a client-wide
    /// user agent.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Http`] if the underlying client cannot be
    /// constructed.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("sqs-client/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::Http {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn invoke(&self, url: &str, timeout: Duration) -> Result<RawResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout {
                        message: e.to_string(),
                    }
                } else if e.is_connect() {
                    TransportError::Connection {
                        message: e.to_string(),
                    }
                } else {
                    TransportError::Http {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        let mut raw = format!(
            "{:?} {} {}\r\n",
            response.version(),
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        );
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                raw.push_str(name.as_str());
                raw.push_str(": ");
                raw.push_str(value);
                raw.push_str("\r\n");
            }
        }
        raw.push_str("\r\n");

        let body = response.text().await.map_err(|e| TransportError::Http {
            message: format!("Failed to read response body: {}", e),
        })?;
        raw.push_str(&body);

        Ok(RawResponse::Text(raw))
    }
}

// ============================================================================
// Static Transport
// ============================================================================

/// Canned-response transport for unit testing client consumers.
///
/// Responses are served in push order and every requested URL is recorded,
/// so tests can assert both on the parameters a client transmitted and on
/// whether the transport was reached at all.
#[derive(Default)]
pub struct StaticTransport {
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    requests: Mutex<Vec<String>>,
}

impl StaticTransport {
    /// Create a transport with no canned responses queued
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw transport outcome
    pub fn push_response(&self, response: Result<RawResponse, TransportError>) {
        self.responses
            .lock()
            .expect("static transport lock poisoned")
            .push_back(response);
    }

    /// Queue a successful `200 OK` text response with the given body
    pub fn push_body(&self, body: &str) {
        self.push_response(Ok(RawResponse::Text(format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/xml\r\n\r\n{}",
            body
        ))));
    }

    /// Queue a transport failure
    pub fn push_error(&self, error: TransportError) {
        self.push_response(Err(error));
    }

    /// Every URL requested so far, in call order
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("static transport lock poisoned")
            .clone()
    }

    /// Number of calls that reached this transport
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .expect("static transport lock poisoned")
            .len()
    }
}

#[async_trait]
impl HttpTransport for StaticTransport {
    async fn invoke(&self, url: &str, _timeout: Duration) -> Result<RawResponse, TransportError> {
        self.requests
            .lock()
            .expect("static transport lock poisoned")
            .push(url.to_string());

        self.responses
            .lock()
            .expect("static transport lock poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Connection {
                    message: "no canned response queued".to_string(),
                })
            })
    }
}
