//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate normalizer, repository and aggregator into use-cases.
//! - Keep handler layers decoupled from storage details.

pub mod survey_service;
