//! RPC client - a request builder bound to a transport
//!
//! Queue calls and notifications, then [`RpcClient::flush`] sends them as one
//! request and decodes the reply.

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use super::builder::RequestBuilder;
use super::decode::decode;
use super::envelope::{Encoded, ResponseBody};
use super::exception::Exception;
use super::message::{Params, PendingMessage};
use crate::transport::Transport;

/// JSON-RPC client over any [`Transport`]
#[derive(Debug)]
pub struct RpcClient<T> {
    transport: T,
    builder: RequestBuilder,
    next_id: i64,
}

impl<T: Transport> RpcClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            builder: RequestBuilder::new(),
            next_id: 1,
        }
    }

    /// Start automatic ids at `first_id`
    pub fn with_first_id(mut self, first_id: i64) -> Self {
        self.next_id = first_id;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Allocate the next automatic id
    pub fn next_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn query(&mut self, id: i64, method: impl Into<String>, params: Option<Params>) {
        self.builder.query(id, method, params);
    }

    pub fn notify(&mut self, method: impl Into<String>, params: Option<Vec<Value>>) {
        self.builder.notify(method, params);
    }

    /// Direct access to the queue
    pub fn builder_mut(&mut self) -> &mut RequestBuilder {
        &mut self.builder
    }

    pub fn pending(&self) -> &[PendingMessage] {
        self.builder.pending()
    }

    /// Drain the queue without sending it
    pub fn encode(&mut self) -> Option<Encoded> {
        self.builder.encode()
    }

    /// Send everything queued and decode the reply.
    ///
    /// Returns no payloads when nothing was queued. A notification-only
    /// request with an empty reply also yields no payloads.
    pub async fn flush(
        &mut self,
        handler: Option<&mut (dyn FnMut(Exception) + Send)>,
    ) -> Result<Vec<Value>> {
        let Some(encoded) = self.builder.encode() else {
            return Ok(Vec::new());
        };

        debug!(
            target = %self.transport.target(),
            requests = encoded.requests().len(),
            "Flushing queue"
        );
        let response = self.transport.post(&encoded).await?;

        if encoded.is_notification_only() && response.is_null() {
            return Ok(Vec::new());
        }

        let handler = handler.map(|h| h as &mut dyn FnMut(Exception));
        Ok(decode(&ResponseBody::from(response), handler))
    }

    /// Send a single call and return its result.
    ///
    /// Any exception reported while decoding becomes the error. The queue
    /// must be empty so the reply cannot be confused with other messages.
    pub async fn call(&mut self, method: &str, params: Option<Params>) -> Result<Value> {
        anyhow::ensure!(
            self.builder.is_empty(),
            "Cannot issue a call while {} message(s) are queued",
            self.builder.len()
        );

        let id = self.next_id();
        self.builder.query(id, method, params);

        let mut first_exception = None;
        let payloads = self
            .flush(Some(&mut |e: Exception| {
                first_exception.get_or_insert(e);
            }))
            .await?;

        if let Some(exception) = first_exception {
            return Err(exception).with_context(|| format!("Call to '{}' failed", method));
        }

        payloads
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("Empty response to '{}'", method))
    }
}
