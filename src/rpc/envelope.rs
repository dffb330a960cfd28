//! Single-vs-batch wire shapes
//!
//! JSON-RPC 2.0 sends one request as a bare object and several as an
//! array, and replies the same way. Both directions are modelled as a
//! two-case enum.

use serde::Serialize;
use serde_json::Value;

use super::message::WireRequest;

/// Output of [`RequestBuilder::encode`](super::RequestBuilder::encode)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Encoded {
    Single(WireRequest),
    Batch(Vec<WireRequest>),
}

impl Encoded {
    /// Requests in submission order
    pub fn requests(&self) -> &[WireRequest] {
        match self {
            Encoded::Single(request) => std::slice::from_ref(request),
            Encoded::Batch(requests) => requests,
        }
    }

    pub fn is_batch(&self) -> bool {
        matches!(self, Encoded::Batch(_))
    }

    /// True when no request expects a response
    pub fn is_notification_only(&self) -> bool {
        self.requests().iter().all(WireRequest::is_notification)
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// A raw response, normalized to single or batch
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Single(Value),
    Batch(Vec<Value>),
}

impl ResponseBody {
    /// Response entries in the order the server sent them
    pub fn entries(&self) -> &[Value] {
        match self {
            ResponseBody::Single(entry) => std::slice::from_ref(entry),
            ResponseBody::Batch(entries) => entries,
        }
    }
}

impl From<Value> for ResponseBody {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(entries) => ResponseBody::Batch(entries),
            other => ResponseBody::Single(other),
        }
    }
}
