//! # eventboard-adapter-storage-sqlite-sqlx
//!
//! `SQLite` document store adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `DocumentStore` port defined in `eventboard-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Store each document body as JSON text, keyed by `(collection, id)`
//!
//! ## Dependency rule
//! Depends on `eventboard-app` (for port traits) and `eventboard-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

mod document_store;
mod error;
mod pool;

pub use document_store::SqliteDocumentStore;
pub use error::StorageError;
pub use pool::{Config, Database};
