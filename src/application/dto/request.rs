//! Request DTOs
//!
//! Data structures for API request bodies.

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::Value;

/// Presence update sent by the website: `{userId, sessionId, action}`.
///
/// Fields are kept as raw JSON values so that wrongly typed input is reported
/// with the presence validation messages rather than a generic body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceRequest {
    #[serde(default)]
    pub user_id: Option<Value>,

    #[serde(default)]
    pub session_id: Option<Value>,

    #[serde(default)]
    pub action: Option<Value>,
}

impl PresenceRequest {
    /// Account identifier, empty when missing or unusable
    pub fn user_id(&self) -> Cow<'_, str> {
        identifier(self.user_id.as_ref())
    }

    /// Session identifier, empty when missing or unusable
    pub fn session_id(&self) -> Cow<'_, str> {
        identifier(self.session_id.as_ref())
    }

    /// Requested action, `None` when absent or `null`.
    ///
    /// Non-string values are returned as their JSON text, which never names a
    /// known action and is therefore rejected as invalid.
    pub fn action(&self) -> Option<Cow<'_, str>> {
        match self.action.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

/// Strings are used as-is and non-zero numbers by their decimal text.
/// Everything else (null, booleans, zero, arrays, objects) counts as missing.
fn identifier(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Cow::Owned(n.to_string()),
        _ => Cow::Borrowed(""),
    }
}
