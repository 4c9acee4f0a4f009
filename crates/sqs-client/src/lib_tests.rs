//! Tests for crate-root re-exports and protocol constants.

use super::*;
use std::sync::Arc;

#[test]
fn test_protocol_constants() {
    assert_eq!(API_VERSION, "2008-01-01");
    assert_eq!(SIGNATURE_VERSION, "1");
    assert_eq!(DEFAULT_ENDPOINT, "http://queue.amazonaws.com/");
}

#[test]
fn test_clients_construct_from_root_exports() {
    let credentials = Credentials::new("key", "secret", "123456789012");
    let transport: Arc<StaticTransport> = Arc::new(StaticTransport::new());

    let _manager = QueueManagerClient::new(&credentials, transport.clone());

    let queue_url = QueueUrl::new("http://queue.amazonaws.com/unittest-1".to_string()).unwrap();
    let _queue = QueueClient::new(queue_url, &credentials, transport);
}

#[test]
fn test_clients_share_a_sender() {
    let credentials = Credentials::new("key", "secret", "123456789012");
    let transport: Arc<StaticTransport> = Arc::new(StaticTransport::new());
    let sender = SignedRequestSender::new(&credentials, transport);

    let _manager = QueueManagerClient::with_sender(sender.clone());

    let queue_url = QueueUrl::new("http://queue.amazonaws.com/unittest-1".to_string()).unwrap();
    let _queue = QueueClient::with_sender(queue_url, sender);
}

#[test]
fn test_clients_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<QueueManagerClient>();
    assert_send_sync::<QueueClient>();
    assert_send_sync::<SignedRequestSender>();
}
