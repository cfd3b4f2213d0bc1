//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the store contract used by survey use-cases.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - The core only appends and reads; it never updates or deletes rows.

pub mod survey_repo;
