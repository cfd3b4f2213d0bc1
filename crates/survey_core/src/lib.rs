//! Survey data model and aggregation engine.
//! This crate owns the rules for storing submissions and summarizing them.

pub mod config;
pub mod db;
pub mod intake;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod stats;

pub use config::{ConfigError, SurveyConfig};
pub use intake::normalizer::normalize_submission;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::response::{
    FieldValue, NewSurveyResponse, RawSubmission, ResponseId, SurveyResponse,
};
pub use model::summary::{
    AgeStats, FoodStat, FoodTag, RatingField, RatingStat, SurveyReport, SurveySummary,
};
pub use repo::survey_repo::{RepoError, RepoResult, SqliteSurveyRepository, SurveyRepository};
pub use service::survey_service::{sample_response, SurveyService};
pub use stats::aggregator::{summarize, summarize_with, AggregateOptions, TagMatchMode};
pub use stats::coerce::coerce_rating;
pub use stats::render::{render_report_text, NO_DATA_MESSAGE};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
