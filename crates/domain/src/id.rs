//! Event identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an [`Event`](crate::event::Event).
///
/// Stored events carry the opaque id assigned by the document store. The
/// static fallback collection uses small numeric ids, which serialize as JSON
/// numbers rather than strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    /// Numeric id of a fallback sample event.
    Numeric(u64),
    /// Document id assigned by the store.
    Document(String),
}

impl EventId {
    /// Return the document id, if this id was assigned by the store.
    #[must_use]
    pub fn as_document(&self) -> Option<&str> {
        match self {
            Self::Document(id) => Some(id),
            Self::Numeric(_) => None,
        }
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => id.fmt(f),
            Self::Document(id) => id.fmt(f),
        }
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        Self::Document(value)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self::Document(value.to_string())
    }
}
