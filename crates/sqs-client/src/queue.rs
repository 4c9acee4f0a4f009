//! Operations on a single queue: push, pop, and delete messages.

use crate::credentials::Credentials;
use crate::error::SqsError;
use crate::message::{Message, QueueUrl, ReceiptHandle};
use crate::scan;
use crate::sender::SignedRequestSender;
use crate::transport::HttpTransport;
use crate::validate;
use std::sync::Arc;

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;

/// Fewest messages one receive call can ask for
const MIN_POP_COUNT: u32 = 1;

/// Most messages one receive call can ask for
const MAX_POP_COUNT: u32 = 10;

/// Client bound to a single queue endpoint at construction.
///
/// Stateless apart from the captured credentials and queue URL, so a single
/// instance is safe to share across concurrent calls.
#[derive(Debug, Clone)]
pub struct QueueClient {
    queue_url: QueueUrl,
    sender: SignedRequestSender,
}

impl QueueClient {
    /// Create a client for one queue over the given credentials and
    /// transport
    pub fn new(
        queue_url: QueueUrl,
        credentials: &Credentials,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            queue_url,
            sender: SignedRequestSender::new(credentials, transport),
        }
    }

    /// Create a client for one queue sharing an existing sender
    pub fn with_sender(queue_url: QueueUrl, sender: SignedRequestSender) -> Self {
        Self { queue_url, sender }
    }

    /// The queue this client is bound to
    pub fn queue_url(&self) -> &QueueUrl {
        &self.queue_url
    }

    /// Push a message onto the end of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`SqsError::Validation`] without touching the network when
    /// the body exceeds the service's size limit.
    pub async fn push(&self, body: &str) -> Result<(), SqsError> {
        validate::message_body(body)?;

        let params = vec![
            ("Action".to_string(), "SendMessage".to_string()),
            ("MessageBody".to_string(), body.to_string()),
        ];

        self.sender
            .send(params, Some(self.queue_url.as_str()))
            .await
            .map(|_| ())
    }

    /// Pop up to `count` messages from the front of the queue.
    ///
    /// `count` saturates into the service's [1, 10] window instead of being
    /// rejected. Popped messages stay hidden from other consumers for
    /// `visibility_timeout` seconds, or for the queue's default when
    /// `None`. An empty queue yields an empty vec, not a failure.
    pub async fn pop(
        &self,
        count: u32,
        visibility_timeout: Option<u32>,
    ) -> Result<Vec<Message>, SqsError> {
        if let Some(timeout) = visibility_timeout {
            validate::visibility_timeout(timeout)?;
        }

        let count = count.clamp(MIN_POP_COUNT, MAX_POP_COUNT);
        let mut params = vec![
            ("Action".to_string(), "ReceiveMessage".to_string()),
            ("MaxNumberOfMessages".to_string(), count.to_string()),
        ];
        if let Some(timeout) = visibility_timeout {
            params.push(("VisibilityTimeout".to_string(), timeout.to_string()));
        }

        let body = self
            .sender
            .send(params, Some(self.queue_url.as_str()))
            .await?;

        let mut messages = Vec::new();
        for envelope in scan::message_envelopes(&body) {
            let handle = scan::first_tag_value(&envelope, "ReceiptHandle")
                .and_then(|handle| ReceiptHandle::new(handle).ok());
            let text = scan::first_tag_value(&envelope, "Body");

            match (handle, text) {
                (Some(receipt_handle), Some(body)) => messages.push(Message {
                    body,
                    receipt_handle,
                }),
                _ => {
                    return Err(SqsError::Protocol {
                        message: "message envelope is missing its receipt handle or body"
                            .to_string(),
                    })
                }
            }
        }

        Ok(messages)
    }

    /// Pop a single message with the queue's default visibility timeout
    pub async fn pop_one(&self) -> Result<Option<Message>, SqsError> {
        Ok(self.pop(MIN_POP_COUNT, None).await?.into_iter().next())
    }

    /// Delete a message by its receipt handle.
    ///
    /// Handles are single-use. Deleting an already-consumed or otherwise
    /// invalid handle surfaces the service's error; it is not treated as an
    /// idempotent success.
    pub async fn delete(&self, receipt_handle: &ReceiptHandle) -> Result<(), SqsError> {
        let params = vec![
            ("Action".to_string(), "DeleteMessage".to_string()),
            (
                "ReceiptHandle".to_string(),
                receipt_handle.as_str().to_string(),
            ),
        ];

        self.sender
            .send(params, Some(self.queue_url.as_str()))
            .await
            .map(|_| ())
    }
}
