//! Response decoding
//!
//! Every response entry is classified as a result, a server error, or
//! malformed. Results and server errors each yield one payload, in entry
//! order. Malformed entries yield no payload and are only reported to the
//! handler.
//!
//! Payloads are correlated to requests by position only. The `id` field of
//! a response is never matched back to the originating call.

use serde_json::Value;
use tracing::{debug, warn};

use super::envelope::ResponseBody;
use super::exception::Exception;

/// How a single response entry was interpreted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classified<'a> {
    /// Entry carries an `error` field (takes priority over `result`)
    Error(&'a Value),
    /// Entry carries a `result` field
    Result(&'a Value),
    /// Entry carries neither
    Malformed,
}

/// Classify one response entry.
///
/// A field counts as present even when its value is `null`.
pub fn classify(entry: &Value) -> Classified<'_> {
    if let Some(error) = entry.get("error") {
        return Classified::Error(error);
    }
    if let Some(result) = entry.get("result") {
        return Classified::Result(result);
    }
    Classified::Malformed
}

/// Decode a response into its payloads.
///
/// The handler, if any, is called synchronously once per server error or
/// malformed entry, in entry order. Decoding never fails.
pub fn decode(
    response: &ResponseBody,
    mut handler: Option<&mut dyn FnMut(Exception)>,
) -> Vec<Value> {
    let entries = response.entries();
    let mut payloads = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        match classify(entry) {
            Classified::Error(error) => {
                let exception = Exception::from_error_object(error);
                debug!(index, code = exception.code(), "Server returned error");
                if let Some(handler) = handler.as_mut() {
                    handler(exception);
                }
                payloads.push(error.clone());
            }
            Classified::Result(result) => payloads.push(result.clone()),
            Classified::Malformed => {
                warn!(index, "Response entry has neither result nor error");
                if let Some(handler) = handler.as_mut() {
                    handler(Exception::missing_result_or_error());
                }
            }
        }
    }

    payloads
}
