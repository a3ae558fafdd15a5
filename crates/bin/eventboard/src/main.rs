//! # eventboard — event store command line
//!
//! Composition root that wires the document store into the event store and
//! runs a single command.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars) and the command line
//! - Install the `tracing` subscriber (stderr, so stdout carries only JSON)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the one document store client and inject it into `EventStore`
//! - Print the resulting `{events: [...]}` collection as JSON
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod command;
mod config;

use std::process::ExitCode;

use eventboard_adapter_storage_sqlite_sqlx::SqliteDocumentStore;
use eventboard_app::services::event_store::EventStore;
use tracing_subscriber::EnvFilter;

use crate::command::{Command, USAGE};
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let command = match Command::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return Ok(ExitCode::from(2));
        }
    };

    // Storage
    tracing::debug!(database_url = config.database_url(), "opening document store");
    let db = eventboard_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let store = SqliteDocumentStore::new(db.pool().clone());

    // Service
    let events = EventStore::new(store).with_like_failure(config.likes.on_failure);

    let collection = command.run(&events).await?;
    println!("{}", serde_json::to_string_pretty(&collection)?);

    Ok(ExitCode::SUCCESS)
}
