use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Row identifier as returned by the REST backend.
///
/// Tables may key rows by integer or by UUID, so the id is kept in its
/// textual form and accepts either a JSON number or a JSON string. An id
/// decoded from a JSON number is written back as a number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "serde_json::Value")]
pub struct RowId {
    text: String,
    numeric: bool,
}

impl RowId {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            text: value.into(),
            numeric: false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn as_integer(&self) -> Option<i64> {
        self.text.parse().ok()
    }
}

// Equality and hashing look at the text only, so `RowId::new("42")` finds a
// row whose id arrived as the number 42.
impl PartialEq for RowId {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for RowId {}

impl Hash for RowId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

/// Integer ids order numerically; anything else orders as text.
impl Ord for RowId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_integer(), other.as_integer()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.text.cmp(&other.text)),
            _ => self.text.cmp(&other.text),
        }
    }
}

impl PartialOrd for RowId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<serde_json::Value> for RowId {
    type Error = String;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(text) => Ok(RowId {
                text,
                numeric: false,
            }),
            serde_json::Value::Number(n) => Ok(RowId {
                text: n.to_string(),
                numeric: true,
            }),
            other => Err(format!("Invalid row id: {}", other)),
        }
    }
}

impl From<RowId> for serde_json::Value {
    fn from(id: RowId) -> Self {
        if id.numeric {
            if let Ok(n) = serde_json::from_str::<serde_json::Number>(&id.text) {
                return serde_json::Value::Number(n);
            }
        }
        serde_json::Value::String(id.text)
    }
}

impl From<RowId> for String {
    fn from(id: RowId) -> Self {
        id.text
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
