//! `SQLite` implementation of [`DocumentStore`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use eventboard_app::ports::{DocumentStore, Snapshot};
use eventboard_domain::error::{EventBoardError, NotFoundError};
use eventboard_domain::record::{Document, Record};

use crate::error::StorageError;

/// Wrapper for converting database rows into a [`Document`].
struct Wrapper(Document);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Document> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let data_json: String = row.try_get("data")?;

        let data = decode(&id, &data_json).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Document { id, data }))
    }
}

fn decode(id: &str, json: &str) -> Result<Record, StorageError> {
    match serde_json::from_str(json)? {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(StorageError::NotAnObject(id.to_string())),
    }
}

fn encode(record: &Record) -> Result<String, StorageError> {
    Ok(serde_json::to_string(record)?)
}

const INSERT: &str = r"
    INSERT INTO documents (collection, id, data, created_at)
    VALUES (?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT id, data FROM documents WHERE collection = ? AND id = ?";
const SELECT_ALL: &str = "SELECT id, data FROM documents WHERE collection = ? ORDER BY id";
const UPDATE: &str = "UPDATE documents SET data = ? WHERE collection = ? AND id = ?";

/// `SQLite`-backed document store.
///
/// Ids are random hyphenless UUIDs; a collection scan is ordered by id.
#[derive(Clone)]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    /// Create a new document store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DocumentStore for SqliteDocumentStore {
    async fn get_all(&self, collection: &str) -> Result<Snapshot, EventBoardError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .bind(collection)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Snapshot::new(rows.into_iter().map(|w| w.0).collect()))
    }

    async fn add(&self, collection: &str, record: Record) -> Result<String, EventBoardError> {
        let id = uuid::Uuid::new_v4().simple().to_string();
        let data_json = encode(&record)?;

        sqlx::query(INSERT)
            .bind(collection)
            .bind(&id)
            .bind(&data_json)
            .bind(chrono::Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(id)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, EventBoardError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        record: Record,
    ) -> Result<(), EventBoardError> {
        let data_json = encode(&record)?;

        let result = sqlx::query(UPDATE)
            .bind(&data_json)
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError {
                entity: "Document",
                id: id.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
