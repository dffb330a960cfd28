//! `jrpc batch` command
//!
//! Reads a JSON array of messages and sends them as one batch. Entries with
//! an `id` are calls, entries without one are notifications.
//!
//! # Usage
//! ```bash
//! jrpc batch requests.json
//! cat requests.json | jrpc batch -
//! jrpc batch requests.json --dry-run
//! ```
//!
//! ```json
//! [
//!   {"id": 1, "method": "sum", "params": [1, 2, 4]},
//!   {"method": "notify_hello", "params": [7]},
//!   {"id": 2, "method": "get_data"}
//! ]
//! ```

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use serde_json::Value;

use super::output::{print_decoded, print_encoded};
use super::{connect, read_json, OutputFormat};
use crate::config::Config;
use crate::rpc::{Exception, Params, RequestBuilder};

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// File containing a JSON array of messages ("-" for stdin)
    pub file: String,

    /// Print the encoded request instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

/// One message in a batch file
#[derive(Debug, Deserialize)]
pub struct BatchEntry {
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
    #[serde(default)]
    pub id: Option<i64>,
}

/// Queue every entry on the builder, in file order
pub fn queue_entries(builder: &mut RequestBuilder, entries: Vec<BatchEntry>) -> Result<()> {
    for (index, entry) in entries.into_iter().enumerate() {
        let params = entry
            .params
            .map(|value| {
                Params::from_value(value).map_err(|other| {
                    anyhow::anyhow!("Entry {}: params must be an array or object, got: {}", index, other)
                })
            })
            .transpose()?;

        match entry.id {
            Some(id) => builder.query(id, entry.method, params),
            None => {
                let params = match params {
                    None => None,
                    Some(Params::Positional(items)) => Some(items),
                    Some(Params::Named(_)) => {
                        anyhow::bail!("Entry {}: notification params must be an array", index)
                    }
                };
                builder.notify(entry.method, params);
            }
        }
    }

    Ok(())
}

fn load_entries(path: &str) -> Result<Vec<BatchEntry>> {
    let value = read_json(path)?;
    serde_json::from_value(value).context("Batch file must be a JSON array of messages")
}

pub async fn run(args: BatchArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let entries = load_entries(&args.file)?;

    if args.dry_run {
        let mut builder = RequestBuilder::new();
        queue_entries(&mut builder, entries)?;
        match builder.encode() {
            Some(encoded) => print_encoded(&encoded, format)?,
            None => println!("Nothing to send."),
        }
        return Ok(());
    }

    let mut client = connect(config)?;
    queue_entries(client.builder_mut(), entries)?;

    let mut exceptions = Vec::new();
    let payloads = client
        .flush(Some(&mut |e: Exception| exceptions.push(e)))
        .await?;

    print_decoded(&payloads, &exceptions, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entries(value: Value) -> Vec<BatchEntry> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_queue_entries() -> Result<()> {
        let mut builder = RequestBuilder::new();
        queue_entries(
            &mut builder,
            entries(json!([
                {"id": 1, "method": "sum", "params": [1, 2, 4]},
                {"method": "notify_hello", "params": [7]},
                {"id": 2, "method": "get_data", "params": {"key": "a"}}
            ])),
        )?;

        let pending = builder.pending();
        assert_eq!(pending.len(), 3);
        assert_eq!(pending[0].id(), Some(1));
        assert!(pending[1].is_notification());
        assert_eq!(pending[2].method(), "get_data");

        Ok(())
    }

    #[test]
    fn test_named_notification_params_rejected() {
        let mut builder = RequestBuilder::new();
        let result = queue_entries(
            &mut builder,
            entries(json!([{"method": "update", "params": {"a": 1}}])),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_scalar_params_rejected() {
        let mut builder = RequestBuilder::new();
        let result = queue_entries(&mut builder, entries(json!([{"id": 1, "method": "m", "params": 5}])));
        assert!(result.is_err());
    }
}
