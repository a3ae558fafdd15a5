//! # eventboard-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven port** adapters must implement:
//!   - `DocumentStore` — list, add, get and overwrite documents in a named
//!     collection
//! - Define the **driving** use-case:
//!   - `EventStore` — list events, add an event, like, unlike
//! - Own the fallback policy: what callers receive when the store is empty
//!   or failing
//!
//! ## Dependency rule
//! Depends on `eventboard-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
