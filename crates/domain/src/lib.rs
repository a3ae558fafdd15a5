//! # eventboard-domain
//!
//! Pure domain model for the eventboard data-access layer.
//!
//! ## Responsibilities
//! - Foundational types: identifiers and error conventions
//! - Define **Events** (title, description, location and a like counter)
//! - Define the schemaless **Record** stored per document and the rules for
//!   reading and adjusting its `likes` field
//! - Hold the static **fallback** collection served when the store is empty
//!   or unreachable
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod event;
pub mod record;
