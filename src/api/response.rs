//! Reply shape shared by both endpoints.
//!
//! `{"status": "ok", "result": <value>}` on success,
//! `{"status": <anything else>, "message": <string>}` on failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status value that marks a successful reply.
pub const STATUS_OK: &str = "ok";

/// Raw reply as decoded from JSON. Fields the server omitted stay `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub status: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
}

/// What a reply means to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success { result: Option<Value> },
    Failure { message: Option<Value> },
}

impl ApiResponse {
    pub fn ok(result: impl Into<Value>) -> Self {
        Self {
            status: Some(Value::from(STATUS_OK)),
            result: Some(result.into()),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Some(Value::from("error")),
            result: None,
            message: Some(Value::String(message.into())),
        }
    }

    /// Pick the known fields out of a JSON value. Non-object replies carry none of them.
    ///
    /// `fetch` rejects a top-level `null` before it gets here.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => Self {
                status: fields.remove("status"),
                result: fields.remove("result"),
                message: fields.remove("message"),
            },
            _ => Self::default(),
        }
    }

    /// Only the exact string `"ok"` counts as success.
    pub fn is_ok(&self) -> bool {
        matches!(&self.status, Some(Value::String(s)) if s == STATUS_OK)
    }

    pub fn outcome(&self) -> Outcome {
        if self.is_ok() {
            Outcome::Success {
                result: self.result.clone(),
            }
        } else {
            Outcome::Failure {
                message: self.message.clone(),
            }
        }
    }
}
