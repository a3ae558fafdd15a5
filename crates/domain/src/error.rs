//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`EventBoardError`] via `From`.

/// A requested document does not exist in its collection.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// Kind of thing that was looked up (e.g. `"Event"`).
    pub entity: &'static str,
    /// Identifier that was looked up.
    pub id: String,
}

/// Base error for all eventboard operations.
#[derive(Debug, thiserror::Error)]
pub enum EventBoardError {
    /// The target document is missing.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The backing store failed (connection, query, encoding, …).
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl EventBoardError {
    /// Wrap an arbitrary store-level failure.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Box::new(err))
    }
}
