//! Transport module
//!
//! Carries an encoded request to the server and hands back the parsed
//! response body.

mod http;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::rpc::Encoded;

pub use http::HttpTransport;

/// Something that can deliver an encoded request and return the reply
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the payload and return the parsed response.
    ///
    /// An empty reply body is returned as `Value::Null`.
    async fn post(&self, body: &Encoded) -> Result<Value>;

    /// Human readable target (URL, socket, ...) for logging
    fn target(&self) -> String;
}
