//! Wire types for the `/chat` endpoint.
//!
//! The backend replies with `{"query": ..., "response": ...}` on success and
//! `{"error": ...}` when its own pipeline fails. Both are optional here: any
//! field that is missing, empty, or not a string counts as absent.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::client::BackendError;

/// Displayed when the reply carries neither `response` nor `error`.
pub const NO_RESPONSE_TEXT: &str = "No response";

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    #[serde(default, deserialize_with = "text_field")]
    pub response: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub error: Option<String>,
    /// The query as the backend received it.
    #[serde(default, deserialize_with = "text_field")]
    pub query: Option<String>,
}

/// Keeps non-empty strings, drops everything else.
fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

impl ChatReply {
    /// Parse a response body.
    ///
    /// Any JSON object is accepted. Other JSON values yield an empty reply,
    /// except `null`, which has no fields to read and is treated as a parse
    /// failure. Non-JSON bodies are parse failures.
    pub fn parse(body: &str) -> Result<Self, BackendError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| BackendError::Parse(e.to_string()))?;
        match value {
            Value::Null => Err(BackendError::Parse("body is null".to_string())),
            Value::Object(_) => {
                serde_json::from_value(value).map_err(|e| BackendError::Parse(e.to_string()))
            }
            _ => Ok(Self::default()),
        }
    }

    /// Text to show: `response`, else `error`, else the fallback.
    pub fn display_text(&self) -> &str {
        self.response
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or(NO_RESPONSE_TEXT)
    }
}
