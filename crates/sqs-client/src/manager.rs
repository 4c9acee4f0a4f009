//! Account-level queue management operations.

use crate::credentials::Credentials;
use crate::error::SqsError;
use crate::message::{attributes, QueueAttributes, QueueUrl};
use crate::scan;
use crate::sender::SignedRequestSender;
use crate::transport::HttpTransport;
use crate::validate;
use std::sync::Arc;

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;

/// Client for operations over the whole-account queue namespace.
///
/// Stateless apart from the credentials captured at construction, so a
/// single instance is safe to share across concurrent calls.
///
/// The service is eventually consistent: queues just created or deleted may
/// take up to a minute to appear in, or vanish from, list results. That
/// window is a property of the service and is not hidden here.
#[derive(Debug, Clone)]
pub struct QueueManagerClient {
    sender: SignedRequestSender,
}

impl QueueManagerClient {
    /// Visibility timeout applied to created queues when none is given,
    /// in seconds
    pub const DEFAULT_VISIBILITY_TIMEOUT: u32 = 30;

    /// Create a manager client over the given credentials and transport
    pub fn new(credentials: &Credentials, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            sender: SignedRequestSender::new(credentials, transport),
        }
    }

    /// Create a manager client sharing an existing sender
    pub fn with_sender(sender: SignedRequestSender) -> Self {
        Self { sender }
    }

    /// List queues, optionally restricted to names starting with `prefix`.
    pub async fn list_queues(&self, prefix: Option<&str>) -> Result<Vec<QueueUrl>, SqsError> {
        let mut params = vec![("Action".to_string(), "ListQueues".to_string())];
        if let Some(prefix) = prefix {
            params.push(("QueueNamePrefix".to_string(), prefix.to_string()));
        }

        let body = self.sender.send(params, None).await?;

        Ok(scan::tag_values(&body, "QueueUrl")
            .into_iter()
            .filter_map(|url| QueueUrl::new(url).ok())
            .collect())
    }

    /// Create a queue with the given default visibility timeout (30 seconds
    /// when `None`).
    ///
    /// # Errors
    ///
    /// Returns [`SqsError::Validation`] without touching the network when
    /// the name or timeout violates the service's constraints.
    pub async fn create_queue(
        &self,
        name: &str,
        visibility_timeout: Option<u32>,
    ) -> Result<(), SqsError> {
        validate::queue_name(name)?;
        if let Some(timeout) = visibility_timeout {
            validate::visibility_timeout(timeout)?;
        }

        let timeout = visibility_timeout.unwrap_or(Self::DEFAULT_VISIBILITY_TIMEOUT);
        let params = vec![
            ("Action".to_string(), "CreateQueue".to_string()),
            ("QueueName".to_string(), name.to_string()),
            ("DefaultVisibilityTimeout".to_string(), timeout.to_string()),
        ];

        self.sender.send(params, None).await.map(|_| ())
    }

    /// Delete a queue. Every message still in the queue is lost.
    pub async fn delete_queue(&self, queue: &QueueUrl) -> Result<(), SqsError> {
        let params = vec![("Action".to_string(), "DeleteQueue".to_string())];

        self.sender
            .send(params, Some(queue.as_str()))
            .await
            .map(|_| ())
    }

    /// Fetch queue attributes.
    ///
    /// `attribute` names a single attribute to read, or selects every
    /// available attribute when `None`.
    pub async fn get_queue_attributes(
        &self,
        queue: &QueueUrl,
        attribute: Option<&str>,
    ) -> Result<QueueAttributes, SqsError> {
        let params = vec![
            ("Action".to_string(), "GetQueueAttributes".to_string()),
            (
                "AttributeName".to_string(),
                attribute.unwrap_or(attributes::ALL).to_string(),
            ),
        ];

        let body = self.sender.send(params, Some(queue.as_str())).await?;

        Ok(scan::attribute_pairs(&body).into_iter().collect())
    }

    /// Set one queue attribute.
    ///
    /// # Errors
    ///
    /// Returns [`SqsError::Validation`] without touching the network when
    /// the attribute name is not settable or its value is out of range.
    pub async fn set_queue_attribute(
        &self,
        queue: &QueueUrl,
        name: &str,
        value: &str,
    ) -> Result<(), SqsError> {
        validate::attribute(name, value)?;

        let params = vec![
            ("Action".to_string(), "SetQueueAttributes".to_string()),
            ("Attribute.Name".to_string(), name.to_string()),
            ("Attribute.Value".to_string(), value.to_string()),
        ];

        self.sender
            .send(params, Some(queue.as_str()))
            .await
            .map(|_| ())
    }
}
