//! jrpc - JSON-RPC 2.0 batching client
//!
//! Queue calls and notifications, send them as one request, and decode the
//! reply into ordered payloads.
//!
//! # Key Concepts
//!
//! - **Single vs batch**: one queued message is sent as a bare object, two or
//!   more as an array
//! - **Drain on encode**: encoding empties the queue
//! - **Positional replies**: payloads follow response order; ids are not
//!   matched back to calls
//! - **Exceptions**: server `error` objects and malformed entries are
//!   reported through an optional handler

pub mod cli;
pub mod config;
pub mod rpc;
pub mod transport;

pub use rpc::{
    decode, Encoded, Exception, ExceptionKind, Params, RequestBuilder, ResponseBody, RpcClient,
};
pub use transport::{HttpTransport, Transport};
