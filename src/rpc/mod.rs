//! JSON-RPC 2.0 client core
//!
//! - [`RequestBuilder`] queues calls and notifications and encodes them
//!   into a single request or a batch
//! - [`decode`] turns a response back into ordered payloads, reporting
//!   server errors and malformed entries as [`Exception`]s
//! - [`RpcClient`] ties a builder to a [`Transport`](crate::transport::Transport)

mod builder;
mod client;
pub mod decode;
mod envelope;
pub mod exception;
mod message;

pub use builder::RequestBuilder;
pub use client::RpcClient;
pub use decode::{classify, decode, Classified};
pub use envelope::{Encoded, ResponseBody};
pub use exception::{Exception, ExceptionKind};
pub use message::{Params, PendingMessage, WireRequest, VERSION};
