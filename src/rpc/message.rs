//! JSON-RPC 2.0 request types
//!
//! A queued message is either a [`PendingMessage::Call`] (carries an id and
//! expects a response) or a [`PendingMessage::Notification`] (no id, no
//! response). [`WireRequest`] is the serialized shape of either one.

use serde::Serialize;
use serde_json::{Map, Value};

/// Protocol version tag carried by every request
pub const VERSION: &str = "2.0";

/// Call parameters, positional or named
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Params {
    Positional(Vec<Value>),
    Named(Map<String, Value>),
}

impl Params {
    /// Interpret a raw JSON value as call parameters.
    ///
    /// Arrays become positional params and objects become named params.
    /// Any other value is returned back as the error.
    pub fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Array(items) => Ok(Params::Positional(items)),
            Value::Object(map) => Ok(Params::Named(map)),
            other => Err(other),
        }
    }
}

impl From<Vec<Value>> for Params {
    fn from(items: Vec<Value>) -> Self {
        Params::Positional(items)
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Params::Named(map)
    }
}

/// A message waiting in the builder queue
#[derive(Debug, Clone, PartialEq)]
pub enum PendingMessage {
    Call {
        id: i64,
        method: String,
        params: Option<Params>,
    },
    Notification {
        method: String,
        params: Option<Vec<Value>>,
    },
}

impl PendingMessage {
    pub fn method(&self) -> &str {
        match self {
            PendingMessage::Call { method, .. } | PendingMessage::Notification { method, .. } => {
                method
            }
        }
    }

    /// Id of a call, `None` for notifications
    pub fn id(&self) -> Option<i64> {
        match self {
            PendingMessage::Call { id, .. } => Some(*id),
            PendingMessage::Notification { .. } => None,
        }
    }

    pub fn is_notification(&self) -> bool {
        matches!(self, PendingMessage::Notification { .. })
    }
}

/// Serialized form of a single request.
///
/// Only constructed from a [`PendingMessage`], so a call always has an id
/// and a notification never does.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireRequest {
    jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<Params>,
}

impl WireRequest {
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

impl From<PendingMessage> for WireRequest {
    fn from(message: PendingMessage) -> Self {
        match message {
            PendingMessage::Call { id, method, params } => Self {
                jsonrpc: VERSION,
                id: Some(id),
                method,
                params,
            },
            PendingMessage::Notification { method, params } => Self {
                jsonrpc: VERSION,
                id: None,
                method,
                params: params.map(Params::Positional),
            },
        }
    }
}
