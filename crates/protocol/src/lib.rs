//! JSON-RPC 2.0 request/reply envelopes as spoken on `POST /mcp`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const JSONRPC_VERSION: &str = "2.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    MethodNotFound,
    InvalidParams,
    InternalError,
}

impl ErrorCode {
    pub const fn code(self) -> i64 {
        match self {
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
        }
    }
}

/// Inbound envelope: `{ method, id, params? }`.
///
/// `params` stays raw until a method reads it, so its shape never blocks
/// routing.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub method: String,
    /// Correlation id, echoed verbatim. Absent ids become `null`.
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub params: Option<Value>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("Invalid params: expected an object, got {0}")]
    NotAnObject(&'static str),

    #[error("Invalid params: `{0}` must be a string")]
    NotAString(String),
}

impl Request {
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// `params.<key>`; absent, `null` params and `null` values read as `None`.
    pub fn param(&self, key: &str) -> std::result::Result<Option<&Value>, ParamError> {
        let params = match &self.params {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Object(map)) => map,
            Some(other) => return Err(ParamError::NotAnObject(json_type_name(other))),
        };
        Ok(params.get(key).filter(|value| !value.is_null()))
    }

    pub fn str_param(&self, key: &str) -> std::result::Result<Option<&str>, ParamError> {
        match self.param(key)? {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value)),
            Some(_) => Err(ParamError::NotAString(key.to_string())),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Best-effort correlation id for a body that did not parse as a [`Request`].
pub fn request_id_hint(body: &Value) -> Value {
    body.get("id").cloned().unwrap_or(Value::Null)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorObject {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Result(Value),
    Error(ErrorObject),
}

/// Outbound envelope. Exactly one of `result`/`error` is serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Reply {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            outcome: Outcome::Result(result),
        }
    }

    pub fn failure(id: Value, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            outcome: Outcome::Error(ErrorObject {
                code: code.code(),
                message: message.into(),
            }),
        }
    }
}

pub fn serialize_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(Into::into)
}
