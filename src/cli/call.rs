//! `jrpc call` and `jrpc notify` commands
//!
//! # Usage
//! ```bash
//! jrpc call eth_blockNumber
//! jrpc call subtract --params '[42, 23]'
//! jrpc call subtract --params '{"minuend": 42, "subtrahend": 23}' --id 7
//! jrpc notify update --params '[1, 2, 3]'
//! jrpc call ping --dry-run          # Print the request without sending
//! ```

use anyhow::Result;
use clap::Args;

use super::output::{print_decoded, print_encoded};
use super::{connect, parse_params, parse_positional, OutputFormat};
use crate::config::Config;
use crate::rpc::{Exception, RequestBuilder};

#[derive(Args, Debug)]
pub struct CallArgs {
    /// Method name
    pub method: String,

    /// Params as a JSON array or object
    #[arg(short, long)]
    pub params: Option<String>,

    /// Request id (default: client.first_id from config)
    #[arg(long)]
    pub id: Option<i64>,

    /// Print the encoded request instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct NotifyArgs {
    /// Method name
    pub method: String,

    /// Params as a JSON array
    #[arg(short, long)]
    pub params: Option<String>,

    /// Print the encoded request instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn run_call(args: CallArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let params = args.params.as_deref().map(parse_params).transpose()?;

    if args.dry_run {
        let id = args.id.unwrap_or(config.client.first_id);
        let mut builder = RequestBuilder::new();
        builder.query(id, args.method, params);
        if let Some(encoded) = builder.encode() {
            print_encoded(&encoded, format)?;
        }
        return Ok(());
    }

    let mut client = connect(config)?;
    let id = args.id.unwrap_or_else(|| client.next_id());
    client.query(id, args.method, params);

    let mut exceptions = Vec::new();
    let payloads = client
        .flush(Some(&mut |e: Exception| exceptions.push(e)))
        .await?;

    print_decoded(&payloads, &exceptions, format)
}

pub async fn run_notify(args: NotifyArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let params = args.params.as_deref().map(parse_positional).transpose()?;

    if args.dry_run {
        let mut builder = RequestBuilder::new();
        builder.notify(args.method, params);
        if let Some(encoded) = builder.encode() {
            print_encoded(&encoded, format)?;
        }
        return Ok(());
    }

    let mut client = connect(config)?;
    client.notify(args.method, params);

    let mut exceptions = Vec::new();
    let payloads = client
        .flush(Some(&mut |e: Exception| exceptions.push(e)))
        .await?;

    if payloads.is_empty() && exceptions.is_empty() {
        if format == OutputFormat::Pretty {
            println!("Notification sent.");
        }
        return Ok(());
    }

    print_decoded(&payloads, &exceptions, format)
}
