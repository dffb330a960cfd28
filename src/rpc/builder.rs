//! Request builder - queues calls and notifications for one round trip
//!
//! Messages are appended with [`RequestBuilder::query`] and
//! [`RequestBuilder::notify`] and drained in submission order by
//! [`RequestBuilder::encode`]. Mutation requires `&mut self`; share a
//! builder across threads by wrapping it in a `Mutex`.

use serde_json::Value;
use tracing::debug;

use super::envelope::Encoded;
use super::message::{Params, PendingMessage, WireRequest};

/// Queue of messages waiting to be encoded
#[derive(Debug, Default)]
pub struct RequestBuilder {
    queue: Vec<PendingMessage>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a method call.
    ///
    /// Id uniqueness and method names are not checked.
    pub fn query(&mut self, id: i64, method: impl Into<String>, params: Option<Params>) {
        self.queue.push(PendingMessage::Call {
            id,
            method: method.into(),
            params,
        });
    }

    /// Queue a notification (no response expected)
    pub fn notify(&mut self, method: impl Into<String>, params: Option<Vec<Value>>) {
        self.queue.push(PendingMessage::Notification {
            method: method.into(),
            params,
        });
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Messages currently queued, oldest first
    pub fn pending(&self) -> &[PendingMessage] {
        &self.queue
    }

    /// Drain the queue into its wire form.
    ///
    /// Returns `None` for an empty queue, a single object for one message
    /// and a batch for two or more. The queue is always empty afterwards.
    pub fn encode(&mut self) -> Option<Encoded> {
        let mut requests: Vec<WireRequest> = std::mem::take(&mut self.queue)
            .into_iter()
            .map(WireRequest::from)
            .collect();

        match requests.len() {
            0 => None,
            1 => {
                debug!(method = requests[0].method(), "Encoded single request");
                requests.pop().map(Encoded::Single)
            }
            n => {
                debug!(count = n, "Encoded batch");
                Some(Encoded::Batch(requests))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_empty_queue() {
        let mut builder = RequestBuilder::new();
        assert!(builder.encode().is_none());
        assert!(builder.is_empty());
        assert!(builder.encode().is_none());
    }

    #[test]
    fn test_encode_single_message() {
        let mut builder = RequestBuilder::new();
        builder.query(1, "getblockcount", None);

        let encoded = builder.encode().unwrap();
        assert!(!encoded.is_batch());
        assert_eq!(
            encoded.to_value().unwrap(),
            json!({"jsonrpc": "2.0", "id": 1, "method": "getblockcount"})
        );
        assert!(builder.is_empty());
    }

    #[test]
    fn test_encode_batch_preserves_order() {
        let mut builder = RequestBuilder::new();
        builder.query(1, "sum", Some(vec![json!(1), json!(2)].into()));
        builder.notify("notify_hello", Some(vec![json!(7)]));
        builder.query(2, "get_data", None);
        assert_eq!(builder.len(), 3);

        let encoded = builder.encode().unwrap();
        assert!(encoded.is_batch());
        assert_eq!(
            encoded.to_value().unwrap(),
            json!([
                {"jsonrpc": "2.0", "id": 1, "method": "sum", "params": [1, 2]},
                {"jsonrpc": "2.0", "method": "notify_hello", "params": [7]},
                {"jsonrpc": "2.0", "id": 2, "method": "get_data"}
            ])
        );
        assert!(builder.is_empty());
    }

    #[test]
    fn test_second_encode_returns_none() {
        let mut builder = RequestBuilder::new();
        builder.notify("a", None);
        builder.notify("b", None);

        assert!(builder.encode().is_some());
        assert!(builder.encode().is_none());
    }

    #[test]
    fn test_pending_view() {
        let mut builder = RequestBuilder::new();
        builder.query(5, "first", None);
        builder.notify("second", None);

        let pending = builder.pending();
        assert_eq!(pending[0].method(), "first");
        assert_eq!(pending[0].id(), Some(5));
        assert!(pending[1].is_notification());
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let mut builder = RequestBuilder::new();
        builder.query(1, "a", None);
        builder.query(1, "b", None);

        let encoded = builder.encode().unwrap();
        let ids: Vec<_> = encoded.requests().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![Some(1), Some(1)]);
    }
}
