//! Schemaless document records and the like counter they carry.
//!
//! The store keeps each event as a free-form JSON object. Only `likes` is
//! interpreted here; every other field passes through untouched so a full
//! overwrite never drops data this layer does not know about.

use serde_json::{Map, Value};

/// Field holding the like counter.
pub const LIKES_FIELD: &str = "likes";

/// A stored document body.
pub type Record = Map<String, Value>;

/// A document as returned by the store: its assigned id plus its body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Record,
}

impl Document {
    #[must_use]
    pub fn new(id: impl Into<String>, data: Record) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

/// Direction of a like adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeChange {
    /// Add one like.
    Increment,
    /// Remove one like, never going below zero.
    Decrement,
}

impl LikeChange {
    /// Apply this change to a like count.
    #[must_use]
    pub fn apply(self, likes: u64) -> u64 {
        match self {
            Self::Increment => likes.saturating_add(1),
            Self::Decrement => likes.saturating_sub(1),
        }
    }
}

/// Read the like counter of a record.
///
/// Missing, `null`, `false`, zero, negative or non-numeric values all read
/// as 0. Fractional counts are truncated.
#[must_use]
pub fn likes(record: &Record) -> u64 {
    match record.get(LIKES_FIELD) {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(truncate))
            .unwrap_or(0),
        _ => 0,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate(value: f64) -> u64 {
    value as u64
}

/// Adjust the like counter of `record` in place and return the new count.
pub fn change_likes(record: &mut Record, change: LikeChange) -> u64 {
    let next = change.apply(likes(record));
    record.insert(LIKES_FIELD.to_string(), Value::from(next));
    next
}
