//! Event — something happening somewhere that people can like.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::id::EventId;
use crate::record::{self, Document, LIKES_FIELD, Record};

/// An event as served to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub id: EventId,
    pub description: String,
    pub location: String,
    pub likes: u64,
    /// Stored fields this layer does not interpret, passed through as-is.
    #[serde(flatten)]
    pub extra: Record,
}

/// Fields of a stored body that [`Event`] reads itself.
const KNOWN_FIELDS: [&str; 5] = ["id", "title", "description", "location", LIKES_FIELD];

impl Event {
    /// Materialize an event from a stored document.
    ///
    /// The document id always wins over any `id` field stored in the body.
    /// Missing text fields read as empty strings. Every other stored field
    /// is kept in [`Event::extra`].
    #[must_use]
    pub fn from_document(document: &Document) -> Self {
        let extra = document
            .data
            .iter()
            .filter(|(key, _)| !KNOWN_FIELDS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            title: text(&document.data, "title"),
            id: EventId::Document(document.id.clone()),
            description: text(&document.data, "description"),
            location: text(&document.data, "location"),
            likes: record::likes(&document.data),
            extra,
        }
    }
}

fn text(data: &Record, field: &str) -> String {
    match data.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Caller-supplied data for a new event.
///
/// Anything besides the three text fields (an `id`, a `likes` count, …) is
/// dropped on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub location: String,
}

impl NewEvent {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            location: location.into(),
        }
    }

    /// Build the record to insert: the three text fields and `likes = 0`.
    #[must_use]
    pub fn into_record(self) -> Record {
        let mut record = Record::new();
        record.insert("title".to_string(), Value::String(self.title));
        record.insert("description".to_string(), Value::String(self.description));
        record.insert("location".to_string(), Value::String(self.location));
        record.insert(LIKES_FIELD.to_string(), Value::from(0_u64));
        record
    }
}

/// An ordered list of events, serialized as `{"events": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCollection {
    pub events: Vec<Event>,
}

impl EventCollection {
    /// The sample collection served when the store is empty or unreachable.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            events: vec![
                Event {
                    title: "a mock event".to_string(),
                    id: EventId::Numeric(1),
                    description: "something really cool".to_string(),
                    location: "Joes pizza".to_string(),
                    likes: 0,
                    extra: Record::new(),
                },
                Event {
                    title: "another mock event".to_string(),
                    id: EventId::Numeric(2),
                    description: "something even cooler".to_string(),
                    location: "Johns pizza".to_string(),
                    likes: 0,
                    extra: Record::new(),
                },
            ],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Find an event by id.
    #[must_use]
    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| &event.id == id)
    }
}

impl FromIterator<Event> for EventCollection {
    fn from_iter<T: IntoIterator<Item = Event>>(iter: T) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn should_serialize_fallback_exactly() {
        let json = serde_json::to_value(EventCollection::fallback()).unwrap();
        assert_eq!(
            json,
            json!({
                "events": [
                    {"title": "a mock event", "id": 1, "description": "something really cool", "location": "Joes pizza", "likes": 0},
                    {"title": "another mock event", "id": 2, "description": "something even cooler", "location": "Johns pizza", "likes": 0}
                ]
            })
        );
    }

    #[test]
    fn should_take_id_from_document_not_body() {
        let doc = Document::new("doc-1", body(json!({"id": "stale", "title": "Gig"})));
        let event = Event::from_document(&doc);
        assert_eq!(event.id, EventId::from("doc-1"));
        assert_eq!(event.title, "Gig");
    }

    #[test]
    fn should_default_missing_fields_when_decoding() {
        let doc = Document::new("doc-2", Record::new());
        let event = Event::from_document(&doc);
        assert_eq!(event.title, "");
        assert_eq!(event.description, "");
        assert_eq!(event.location, "");
        assert_eq!(event.likes, 0);
    }

    #[test]
    fn should_pass_through_unknown_stored_fields() {
        let doc = Document::new(
            "doc-3",
            body(json!({"id": "stale", "title": "G", "likes": 3, "date": "2024-01-01", "tags": ["live"]})),
        );
        let event = Event::from_document(&doc);

        assert_eq!(event.extra.len(), 2);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            json!({"title": "G", "id": "doc-3", "description": "", "location": "", "likes": 3, "date": "2024-01-01", "tags": ["live"]})
        );
    }

    #[test]
    fn should_drop_id_and_likes_from_new_event_input() {
        let input = json!({"title": "T", "description": "D", "location": "L", "likes": 99, "id": "x"});
        let new_event: NewEvent = serde_json::from_value(input).unwrap();
        let record = new_event.into_record();

        assert_eq!(record.len(), 4);
        assert_eq!(record["title"], "T");
        assert_eq!(record["description"], "D");
        assert_eq!(record["location"], "L");
        assert_eq!(record["likes"], 0);
        assert!(!record.contains_key("id"));
    }

    #[test]
    fn should_accept_partial_new_event_input() {
        let new_event: NewEvent = serde_json::from_value(json!({"title": "Only"})).unwrap();
        assert_eq!(new_event, NewEvent::new("Only", "", ""));
    }

    #[test]
    fn should_find_event_by_id() {
        let fallback = EventCollection::fallback();
        let second = fallback.get(&EventId::Numeric(2)).unwrap();
        assert_eq!(second.title, "another mock event");
        assert!(fallback.get(&EventId::from("2")).is_none());
    }
}
