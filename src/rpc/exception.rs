//! Exceptions produced while decoding responses
//!
//! There are exactly two kinds: [`ExceptionKind::Protocol`] for an `error`
//! object sent by the server, and [`ExceptionKind::Application`] for a
//! response entry this client could not make sense of.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

// Standard JSON-RPC error codes
pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

/// Code for a response entry with neither `result` nor `error`
pub const MISSING_RESULT_OR_ERROR: i64 = -32099;

const MISSING_RESULT_OR_ERROR_MESSAGE: &str = "Missing result or error in response.";

/// Where an exception came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExceptionKind {
    /// Reported by the server in an `error` object
    Protocol,
    /// Synthesized locally for a malformed response entry
    Application,
}

impl std::fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExceptionKind::Protocol => write!(f, "protocol"),
            ExceptionKind::Application => write!(f, "application"),
        }
    }
}

/// A JSON-RPC exception
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{kind} error {code}: {message}")]
pub struct Exception {
    code: i64,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    kind: ExceptionKind,
}

impl Exception {
    /// Build a protocol exception from a server `error` object.
    ///
    /// A missing `code` reads as 0 and a missing `message` as "".
    pub(crate) fn from_error_object(error: &Value) -> Self {
        Self {
            code: int_field(error, "code"),
            message: string_field(error, "message"),
            data: error.get("data").cloned(),
            kind: ExceptionKind::Protocol,
        }
    }

    pub(crate) fn missing_result_or_error() -> Self {
        Self {
            code: MISSING_RESULT_OR_ERROR,
            message: MISSING_RESULT_OR_ERROR_MESSAGE.to_string(),
            data: None,
            kind: ExceptionKind::Application,
        }
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn kind(&self) -> ExceptionKind {
        self.kind
    }

    pub fn is_protocol(&self) -> bool {
        self.kind == ExceptionKind::Protocol
    }

    pub fn is_application(&self) -> bool {
        self.kind == ExceptionKind::Application
    }

    /// Meaning of the code if it falls in the range reserved by JSON-RPC 2.0
    pub fn standard_meaning(&self) -> Option<&'static str> {
        standard_meaning(self.code)
    }
}

/// Name of a reserved JSON-RPC 2.0 error code
pub fn standard_meaning(code: i64) -> Option<&'static str> {
    match code {
        PARSE_ERROR => Some("Parse error"),
        INVALID_REQUEST => Some("Invalid Request"),
        METHOD_NOT_FOUND => Some("Method not found"),
        INVALID_PARAMS => Some("Invalid params"),
        INTERNAL_ERROR => Some("Internal error"),
        -32099..=-32000 => Some("Server error"),
        _ => None,
    }
}

/// Read a field as an integer, 0 if absent or not numeric (bools read as 1/0)
fn int_field(object: &Value, key: &str) -> i64 {
    match object.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(Value::Bool(b)) => i64::from(*b),
        _ => 0,
    }
}

/// Read a field as a string, "" if absent or not a scalar
fn string_field(object: &Value, key: &str) -> String {
    match object.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_error_object() {
        let exc = Exception::from_error_object(&json!({
            "code": -32602,
            "message": "Invalid params",
            "data": {"param": "amount"}
        }));

        assert_eq!(exc.code(), INVALID_PARAMS);
        assert_eq!(exc.message(), "Invalid params");
        assert_eq!(exc.data(), Some(&json!({"param": "amount"})));
        assert!(exc.is_protocol());
        assert!(!exc.is_application());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let exc = Exception::from_error_object(&json!({}));
        assert_eq!(exc.code(), 0);
        assert_eq!(exc.message(), "");
        assert_eq!(exc.data(), None);

        // A non-object error has no fields at all
        let exc = Exception::from_error_object(&json!("boom"));
        assert_eq!(exc.code(), 0);
        assert_eq!(exc.message(), "");
    }

    #[test]
    fn test_lenient_scalar_fields() {
        let exc = Exception::from_error_object(&json!({"code": "42", "message": 17}));
        assert_eq!(exc.code(), 42);
        assert_eq!(exc.message(), "17");
    }

    #[test]
    fn test_bool_code_reads_as_integer() {
        let exc = Exception::from_error_object(&json!({"code": true, "message": "m"}));
        assert_eq!(exc.code(), 1);

        let exc = Exception::from_error_object(&json!({"code": false}));
        assert_eq!(exc.code(), 0);
    }

    #[test]
    fn test_missing_result_or_error() {
        let exc = Exception::missing_result_or_error();
        assert_eq!(exc.code(), MISSING_RESULT_OR_ERROR);
        assert_eq!(exc.message(), "Missing result or error in response.");
        assert_eq!(exc.kind(), ExceptionKind::Application);
        assert_eq!(exc.standard_meaning(), Some("Server error"));
    }

    #[test]
    fn test_display() {
        let exc = Exception::from_error_object(&json!({
            "code": -32601,
            "message": "Method not found"
        }));
        assert_eq!(exc.to_string(), "protocol error -32601: Method not found");
    }

    #[test]
    fn test_standard_meaning() {
        assert_eq!(standard_meaning(PARSE_ERROR), Some("Parse error"));
        assert_eq!(standard_meaning(-32000), Some("Server error"));
        assert_eq!(standard_meaning(-32100), None);
        assert_eq!(standard_meaning(7), None);
    }
}
