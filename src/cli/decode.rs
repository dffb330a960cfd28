//! `jrpc decode` command
//!
//! Decodes a saved JSON-RPC response and prints the payloads together with
//! any exceptions found in it.
//!
//! # Usage
//! ```bash
//! jrpc decode response.json
//! curl -s ... | jrpc decode -
//! jrpc decode response.json --format json
//! ```

use anyhow::Result;
use clap::Args;

use super::output::print_decoded;
use super::{read_json, OutputFormat};
use crate::rpc::{decode, Exception, ResponseBody};

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// File containing the response ("-" for stdin)
    #[arg(default_value = "-")]
    pub file: String,
}

pub fn run(args: DecodeArgs, format: OutputFormat) -> Result<()> {
    let response = ResponseBody::from(read_json(&args.file)?);

    let mut exceptions = Vec::new();
    let payloads = decode(&response, Some(&mut |e: Exception| exceptions.push(e)));

    print_decoded(&payloads, &exceptions, format)
}
