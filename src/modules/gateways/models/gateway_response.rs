use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Transaction status reported by the validate and detail endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionStatus {
    Success,
    Failed,
    Error,
    /// Any other value, kept verbatim
    Other(String),
}

impl TransactionStatus {
    fn parse(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "SUCCESS" => TransactionStatus::Success,
            "FAILED" => TransactionStatus::Failed,
            "ERROR" => TransactionStatus::Error,
            _ => TransactionStatus::Other(raw.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TransactionStatus::Success)
    }
}

/// Parsed JSON object returned by the gateway
///
/// No schema is imposed; accessors cover the fields both endpoints share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GatewayResponse(Map<String, Value>);

impl GatewayResponse {
    /// Parse a response body, accepting only a top-level JSON object
    pub fn from_body(body: &str) -> Result<Self, String> {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(other) => Err(format!("expected a JSON object, got {}", json_kind(&other))),
            Err(e) => Err(format!("invalid JSON: {}", e)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn status(&self) -> Option<TransactionStatus> {
        self.0
            .get("status")
            .and_then(Value::as_str)
            .map(TransactionStatus::parse)
    }

    pub fn status_description(&self) -> Option<&str> {
        self.0.get("statusDesc").and_then(Value::as_str)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
