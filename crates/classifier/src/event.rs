//! Invocation event

use crate::HandlerError;
use serde_json::Value;

/// Object location extracted from the raw event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationEvent {
    pub bucket: String,
    pub key: String,
}

impl InvocationEvent {
    /// Both fields must be present; a non-object event has neither.
    /// Presence is checked before types, so `{"s3_bucket": 1}` is still a missing location.
    pub fn from_value(event: &Value) -> Result<Self, HandlerError> {
        let (bucket, key) = match (event.get("s3_bucket"), event.get("s3_key")) {
            (Some(bucket), Some(key)) => (bucket, key),
            _ => return Err(HandlerError::MissingLocation),
        };

        Ok(Self {
            bucket: string_field("s3_bucket", bucket)?,
            key: string_field("s3_key", key)?,
        })
    }
}

fn string_field(field: &'static str, value: &Value) -> Result<String, HandlerError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(HandlerError::InvalidField {
            field,
            value: other.to_string(),
            kind: json_kind(other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
