//! Report statistics over stored survey responses.
//!
//! # Responsibility
//! - Coerce raw stored values into numbers for aggregation.
//! - Reduce the full record set into a `SurveyReport`.
//! - Render a report as plain text for the handler layer.

pub mod aggregator;
pub mod coerce;
pub mod render;
