//! Submission intake.
//!
//! Turns raw form payloads into records ready for the store.

pub mod normalizer;
