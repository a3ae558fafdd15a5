//! Document store port — a schemaless store of named collections.

use std::future::Future;

use eventboard_domain::error::EventBoardError;
use eventboard_domain::record::{Document, Record};

/// Result of scanning a whole collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub docs: Vec<Document>,
}

impl Snapshot {
    #[must_use]
    pub fn new(docs: Vec<Document>) -> Self {
        Self { docs }
    }

    /// Whether the collection held no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.len()
    }
}

/// Store holding JSON documents grouped into named collections.
///
/// Document ids are assigned by the store on insertion.
pub trait DocumentStore {
    /// Fetch every document of `collection`.
    fn get_all(
        &self,
        collection: &str,
    ) -> impl Future<Output = Result<Snapshot, EventBoardError>> + Send;

    /// Insert `record` into `collection` and return the id the store assigned.
    fn add(
        &self,
        collection: &str,
        record: Record,
    ) -> impl Future<Output = Result<String, EventBoardError>> + Send;

    /// Fetch a single document, `None` when it does not exist.
    fn get(
        &self,
        collection: &str,
        id: &str,
    ) -> impl Future<Output = Result<Option<Document>, EventBoardError>> + Send;

    /// Replace the whole body of an existing document.
    ///
    /// Returns [`EventBoardError::NotFound`] when the document does not exist.
    fn update(
        &self,
        collection: &str,
        id: &str,
        record: Record,
    ) -> impl Future<Output = Result<(), EventBoardError>> + Send;
}
