//! Exercise records and request/response bodies.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A single exercise record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Server-assigned identifier, immutable once set
    pub id: Uuid,
    /// Free-form title
    pub title: String,
}

impl Exercise {
    pub fn new(id: Uuid, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    /// Whether the stringified id equals `raw` exactly
    pub fn matches(&self, raw: &str) -> bool {
        self.id.to_string() == raw
    }
}

/// Body of a create request
///
/// Unknown keys (including a client-supplied `id`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewExercise {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
}

/// Body of an update request
///
/// `id` may hold any JSON value; it is never stored, the path identifier
/// always wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExerciseUpdate {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub id: Option<Value>,
}

/// Missing or `null` strings decode as `""`
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `{"message": "..."}` envelope used for status replies and errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn ok() -> Self {
        Self::new("OK")
    }
}
