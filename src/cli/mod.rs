//! CLI module - Command definitions and handlers

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;

use crate::config::Config;
use crate::rpc::{Params, RpcClient};
use crate::transport::HttpTransport;

pub mod batch;
pub mod call;
pub mod config;
pub mod decode;
pub mod output;

/// jrpc - JSON-RPC 2.0 batching client
///
/// Send calls and notifications to a JSON-RPC endpoint, one at a time or
/// as a batch, and decode the replies.
#[derive(Parser, Debug)]
#[command(name = "jrpc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, env = "JRPC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Endpoint URL (overrides server.url)
    #[arg(short, long, global = true, env = "JRPC_URL")]
    pub url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a single method call
    Call(call::CallArgs),

    /// Send a notification (no response expected)
    Notify(call::NotifyArgs),

    /// Send a batch of calls and notifications read from a file
    Batch(batch::BatchArgs),

    /// Decode a saved response
    Decode(decode::DecodeArgs),

    /// Show the effective configuration
    Config(config::ConfigArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
}

impl Cli {
    /// Load config and apply command line overrides
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::resolve(self.config.as_deref())?;
        if let Some(ref url) = self.url {
            config.server.url = Some(url.clone());
        }
        Ok(config)
    }
}

/// Build a client for the configured endpoint
pub fn connect(config: &Config) -> Result<RpcClient<HttpTransport>> {
    let transport = HttpTransport::from_config(&config.server)?;
    Ok(RpcClient::new(transport).with_first_id(config.client.first_id))
}

/// Parse `--params` JSON into call parameters
pub fn parse_params(raw: &str) -> Result<Params> {
    let value: Value = serde_json::from_str(raw).context("Params must be valid JSON")?;
    Params::from_value(value)
        .map_err(|other| anyhow::anyhow!("Params must be a JSON array or object, got: {}", other))
}

/// Parse notification params, which must be positional
pub fn parse_positional(raw: &str) -> Result<Vec<Value>> {
    match parse_params(raw)? {
        Params::Positional(items) => Ok(items),
        Params::Named(_) => anyhow::bail!("Notification params must be a JSON array"),
    }
}

/// Read JSON from a file, or stdin when the path is "-"
pub fn read_json(path: &str) -> Result<Value> {
    let content = if path == "-" {
        std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
    };

    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_params() {
        assert_eq!(
            parse_params("[1, \"a\"]").unwrap(),
            Params::Positional(vec![json!(1), json!("a")])
        );
        assert!(matches!(parse_params(r#"{"x": 1}"#).unwrap(), Params::Named(_)));
        assert!(parse_params("42").is_err());
        assert!(parse_params("[1,").is_err());
    }

    #[test]
    fn test_parse_positional_rejects_named() {
        assert_eq!(parse_positional("[true]").unwrap(), vec![json!(true)]);
        assert!(parse_positional(r#"{"x": 1}"#).is_err());
    }

    #[test]
    fn test_url_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nurl = \"http://from-file\"\n").unwrap();

        let cli = Cli::parse_from([
            "jrpc",
            "--config",
            path.to_str().unwrap(),
            "--url",
            "http://from-flag",
            "config",
        ]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.server.url.as_deref(), Some("http://from-flag"));
    }
}
