//! Decoded API responses.

use serde::Serialize;
use serde_json::Value;

/// A successful (200/201) response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    /// Decoded JSON body, or the raw text as a JSON string when it was not JSON.
    pub payload: Value,
}

impl ApiResponse {
    pub fn new(status: u16, payload: Value) -> Self {
        Self { status, payload }
    }

    /// Whether the payload holds no entries (empty list, object or text).
    pub fn is_empty(&self) -> bool {
        match &self.payload {
            Value::Null => true,
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::String(text) => text.is_empty(),
            _ => false,
        }
    }

    /// Number of entries in a list payload; scalars and objects count as one.
    pub fn len(&self) -> usize {
        match &self.payload {
            Value::Array(items) => items.len(),
            _ if self.is_empty() => 0,
            _ => 1,
        }
    }
}
