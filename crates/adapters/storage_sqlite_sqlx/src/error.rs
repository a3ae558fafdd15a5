//! Storage-specific error type wrapping sqlx errors.

use eventboard_domain::error::EventBoardError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// A document body could not be encoded or decoded as JSON.
    #[error("JSON document error")]
    Json(#[from] serde_json::Error),

    /// A stored document body is valid JSON but not an object.
    #[error("document {0} is not a JSON object")]
    NotAnObject(String),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for EventBoardError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
