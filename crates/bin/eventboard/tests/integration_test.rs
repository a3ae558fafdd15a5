//! End-to-end tests for the event store over the real `SQLite` document store.
//!
//! Each test builds the same stack as `main` against an in-memory database.

use eventboard_adapter_storage_sqlite_sqlx::{Config, SqliteDocumentStore};
use eventboard_app::ports::DocumentStore;
use eventboard_app::services::event_store::{EVENTS_COLLECTION, EventStore, LikeFailureMode};
use eventboard_domain::error::EventBoardError;
use eventboard_domain::event::{EventCollection, NewEvent};
use eventboard_domain::id::EventId;
use eventboard_domain::record::Record;
use serde_json::{Value, json};

async fn events() -> EventStore<SqliteDocumentStore> {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    EventStore::new(SqliteDocumentStore::new(db.pool().clone()))
}

fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

async fn seed(events: &EventStore<SqliteDocumentStore>, likes: u64) -> String {
    events
        .store()
        .add(
            EVENTS_COLLECTION,
            record(json!({"title": "Gig", "description": "Live", "location": "Joes pizza", "likes": likes})),
        )
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_fallback_json_when_database_is_empty() {
    let events = events().await;
    let listed = events.list_events().await;

    assert_eq!(listed, EventCollection::fallback());
    let json = serde_json::to_value(&listed).unwrap();
    assert_eq!(json["events"][0]["id"], 1);
    assert_eq!(json["events"][1]["id"], 2);
    assert_eq!(json["events"][1]["location"], "Johns pizza");
}

#[tokio::test]
async fn should_override_stored_id_with_document_id() {
    let events = events().await;
    let id = events
        .store()
        .add(EVENTS_COLLECTION, record(json!({"id": 42, "title": "Gig"})))
        .await
        .unwrap();

    let listed = events.list_events().await;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed.events[0].id, EventId::Document(id));
}

#[tokio::test]
async fn should_return_fields_written_by_other_clients() {
    let events = events().await;
    let id = events
        .store()
        .add(
            EVENTS_COLLECTION,
            record(json!({"title": "G", "likes": 3, "date": "2024-01-01"})),
        )
        .await
        .unwrap();

    let listed = events.add_like(&id).await.unwrap();

    let json = serde_json::to_value(&listed).unwrap();
    assert_eq!(json["events"][0]["date"], "2024-01-01");
    assert_eq!(json["events"][0]["likes"], 4);
    assert_eq!(json["events"][0]["id"], id);
}

// ---------------------------------------------------------------------------
// Adding
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_include_added_event_with_store_assigned_id() {
    let events = events().await;
    let input = json!({"title": "T", "description": "D", "location": "L", "likes": 99, "id": "x"});
    let new_event: NewEvent = serde_json::from_value(input).unwrap();

    let listed = events.add_event(new_event).await.unwrap();

    assert_eq!(listed.len(), 1);
    let added = &listed.events[0];
    let id = added.id.as_document().unwrap();
    assert!(!id.is_empty());
    assert_ne!(id, "x");
    assert_eq!(added.title, "T");
    assert_eq!(added.likes, 0);

    let stored = events
        .store()
        .get(EVENTS_COLLECTION, id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.data["likes"], 0);
    assert!(!stored.data.contains_key("id"));
}

#[tokio::test]
async fn should_list_every_added_event() {
    let events = events().await;
    events.add_event(NewEvent::new("A", "", "")).await.unwrap();
    let listed = events.add_event(NewEvent::new("B", "", "")).await.unwrap();

    let mut titles: Vec<&str> = listed.events.iter().map(|e| e.title.as_str()).collect();
    titles.sort_unstable();
    assert_eq!(titles, vec!["A", "B"]);
}

// ---------------------------------------------------------------------------
// Likes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_increment_likes_from_five_to_six() {
    let events = events().await;
    let id = seed(&events, 5).await;

    events.add_like(&id).await.unwrap();

    let listed = events.list_events().await;
    assert_eq!(listed.get(&EventId::from(id.as_str())).unwrap().likes, 6);
}

#[tokio::test]
async fn should_never_go_below_zero_likes() {
    let events = events().await;
    let id = seed(&events, 0).await;

    let listed = events.remove_like(&id).await.unwrap();
    assert_eq!(listed.get(&EventId::from(id.as_str())).unwrap().likes, 0);

    events.add_like(&id).await.unwrap();
    events.remove_like(&id).await.unwrap();
    let listed = events.remove_like(&id).await.unwrap();
    assert_eq!(listed.get(&EventId::from(id.as_str())).unwrap().likes, 0);
}

#[tokio::test]
async fn should_return_not_found_when_liking_unknown_id() {
    let events = events().await;
    let result = events.add_like("1").await;
    assert!(matches!(result, Err(EventBoardError::NotFound(_))));
}

#[tokio::test]
async fn should_answer_with_listing_when_liking_unknown_id_in_refresh_mode() {
    let events = events().await.with_like_failure(LikeFailureMode::Refresh);
    let listed = events.add_like("1").await.unwrap();
    assert_eq!(listed, EventCollection::fallback());
}
