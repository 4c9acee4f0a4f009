//! Domain types for queues, messages, and attributes.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

// ============================================================================
// Core Domain Identifiers
// ============================================================================

/// Service-assigned queue endpoint.
///
/// List and create operations hand these out; the client holds no other
/// identity for a queue. The value is opaque to the client and is used
/// verbatim as the request endpoint for queue-scoped operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueueUrl(String);

impl QueueUrl {
    /// Create queue URL from the service-provided endpoint string
    pub fn new(url: String) -> Result<Self, ValidationError> {
        if url.is_empty() {
            return Err(ValidationError::Required {
                field: "queue_url".to_string(),
            });
        }

        Ok(Self(url))
    }

    /// Get queue URL as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QueueUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QueueUrl {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

/// Opaque token identifying one delivery of a message.
///
/// A handle accompanies exactly one delete call; the service does not
/// guarantee it stays usable across calls, and this client never reuses a
/// handle after a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReceiptHandle(String);

impl ReceiptHandle {
    /// Create receipt handle from the service-provided token
    pub fn new(handle: String) -> Result<Self, ValidationError> {
        if handle.is_empty() {
            return Err(ValidationError::Required {
                field: "receipt_handle".to_string(),
            });
        }

        Ok(Self(handle))
    }

    /// Get handle as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReceiptHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReceiptHandle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

// ============================================================================
// Message and Attribute Types
// ============================================================================

/// A message popped from a queue with the handle needed to delete it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub body: String,
    pub receipt_handle: ReceiptHandle,
}

/// Queue attributes as returned by the service
pub type QueueAttributes = HashMap<String, String>;

/// Attribute names defined by the service
pub mod attributes {
    /// Pseudo-name selecting every attribute in a get call
    pub const ALL: &str = "All";

    /// Seconds a popped message stays hidden before becoming visible again
    pub const VISIBILITY_TIMEOUT: &str = "VisibilityTimeout";

    /// Approximate count of messages currently in the queue
    pub const APPROXIMATE_NUMBER_OF_MESSAGES: &str = "ApproximateNumberOfMessages";
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
