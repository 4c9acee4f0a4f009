//! Shared signed-request dispatch used by both operation-set clients.

use crate::credentials::Credentials;
use crate::error::SqsError;
use crate::response::ServiceResponse;
use crate::sign::RequestSigner;
use crate::transport::{HttpTransport, REQUEST_TIMEOUT};
use std::sync::Arc;
use tracing::{debug, warn};

#[cfg(test)]
#[path = "sender_tests.rs"]
mod tests;

/// Default root endpoint of the queue service
pub const DEFAULT_ENDPOINT: &str = "http://queue.amazonaws.com/";

/// Signs an action parameter set, dispatches it through the transport, and
/// classifies the outcome.
///
/// [`QueueManagerClient`](crate::manager::QueueManagerClient) and
/// [`QueueClient`](crate::queue::QueueClient) are both built over this
/// capability object; neither varies the dispatch itself. No retries happen
/// here - retry policy, if any, belongs to the caller.
#[derive(Clone)]
pub struct SignedRequestSender {
    signer: RequestSigner,
    transport: Arc<dyn HttpTransport>,
    endpoint: String,
}

impl SignedRequestSender {
    /// Create a sender against the default service endpoint
    pub fn new(credentials: &Credentials, transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_endpoint(credentials, transport, DEFAULT_ENDPOINT)
    }

    /// Create a sender against a specific root endpoint
    pub fn with_endpoint(
        credentials: &Credentials,
        transport: Arc<dyn HttpTransport>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            signer: RequestSigner::new(credentials),
            transport,
            endpoint: endpoint.into(),
        }
    }

    /// Send an action parameter set and return the response body on success.
    ///
    /// The parameters are signed, serialized as a percent-encoded query
    /// string, and issued as a GET against `endpoint` (the service root
    /// when `None` - queue-scoped actions pass their queue URL).
    ///
    /// # Errors
    ///
    /// [`SqsError::Transport`] when the exchange itself fails,
    /// [`SqsError::Service`] when the body carries an error envelope, and
    /// [`SqsError::Protocol`] when the raw response cannot be parsed.
    pub async fn send(
        &self,
        params: Vec<(String, String)>,
        endpoint: Option<&str>,
    ) -> Result<String, SqsError> {
        let action = params
            .iter()
            .find(|(name, _)| name == "Action")
            .map(|(_, value)| value.clone())
            .unwrap_or_default();

        let request = self.signer.sign(params);
        let url = format!(
            "{}?{}",
            endpoint.unwrap_or(&self.endpoint),
            request.to_query_string()
        );

        debug!(action = %action, "dispatching signed request");
        let outcome = self.transport.invoke(&url, REQUEST_TIMEOUT).await;

        let response = ServiceResponse::from_transport(outcome)?;
        if let Err(error) = response.ensure_ok() {
            warn!(action = %action, error = %error, "request failed");
            return Err(error);
        }

        Ok(response.body().to_string())
    }
}

impl std::fmt::Debug for SignedRequestSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedRequestSender")
            .field("signer", &self.signer)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
