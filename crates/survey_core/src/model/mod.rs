//! Survey domain model.
//!
//! # Responsibility
//! - Define the stored record and the raw submission payload.
//! - Define the derived report shapes produced by aggregation.
//!
//! # Invariants
//! - Stored records are append-only from the core's point of view.
//! - Derived report values are never written back to the store.

pub mod response;
pub mod summary;
