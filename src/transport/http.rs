//! HTTP transport
//!
//! POSTs JSON-RPC payloads to a single endpoint with reqwest.

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::Transport;
use crate::config::ServerConfig;
use crate::rpc::Encoded;

/// HTTP client for a JSON-RPC endpoint
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
    token: Option<String>,
    headers: HeaderMap,
}

impl HttpTransport {
    /// Create new transport from server config
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let url = config.url.as_ref().ok_or_else(|| {
            anyhow::anyhow!("Server URL not configured. Set server.url in config or use --url flag.")
        })?;

        Self::new(url, config.token.clone(), config.timeout_secs)?.with_headers(&config.headers)
    }

    /// Create new transport with explicit parameters
    pub fn new(endpoint: &str, token: Option<String>, timeout_secs: u64) -> Result<Self> {
        let endpoint =
            Url::parse(endpoint).with_context(|| format!("Invalid server URL: {}", endpoint))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint,
            token,
            headers: HeaderMap::new(),
        })
    }

    /// Add extra headers sent with every request
    pub fn with_headers(mut self, headers: &BTreeMap<String, String>) -> Result<Self> {
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .with_context(|| format!("Invalid header name: {}", name))?;
            let value = HeaderValue::from_str(value)
                .with_context(|| format!("Invalid value for header {}", name))?;
            self.headers.insert(name, value);
        }
        Ok(self)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Add auth header if token is set
    fn auth_header(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref token) = self.token {
            builder.bearer_auth(token)
        } else {
            builder
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, body: &Encoded) -> Result<Value> {
        debug!(endpoint = %self.endpoint, requests = body.requests().len(), "POST");

        let resp = self
            .auth_header(self.client.post(self.endpoint.clone()))
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to connect to {}", self.endpoint))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("HTTP error ({}): {}", status, text);
        }

        let bytes = resp.bytes().await.context("Failed to read response body")?;
        parse_body(&bytes)
    }

    fn target(&self) -> String {
        self.endpoint.to_string()
    }
}

/// Parse a response body, treating an empty body as null
fn parse_body(bytes: &[u8]) -> Result<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes).context("Failed to parse response")
}
