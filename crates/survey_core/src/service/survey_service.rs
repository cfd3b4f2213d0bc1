//! Survey use-case service.
//!
//! # Responsibility
//! - `submit`: normalize a raw payload and append it to the store.
//! - `report`: read every stored response and summarize it.
//!
//! # Invariants
//! - Only repository calls can fail; normalization and aggregation cannot.
//! - A store failure is returned as `Err`, never as an empty report.
//! - Log events carry counts and ids only, never submitted field values.

use crate::intake::normalizer::normalize_submission;
use crate::model::response::{NewSurveyResponse, RawSubmission, ResponseId};
use crate::model::summary::SurveyReport;
use crate::repo::survey_repo::{RepoResult, SurveyRepository};
use crate::stats::aggregator::{summarize_with, AggregateOptions};
use log::{error, info};
use std::time::Instant;

/// Use-case service over an injected survey repository.
pub struct SurveyService<R: SurveyRepository> {
    repo: R,
    options: AggregateOptions,
}

impl<R: SurveyRepository> SurveyService<R> {
    /// Creates a service with default aggregation options.
    pub fn new(repo: R) -> Self {
        Self::with_options(repo, AggregateOptions::default())
    }

    pub fn with_options(repo: R, options: AggregateOptions) -> Self {
        Self { repo, options }
    }

    /// Normalizes and stores one submission.
    ///
    /// # Errors
    /// Returns the repository error when the row could not be saved.
    pub fn submit(&self, raw: &RawSubmission) -> RepoResult<ResponseId> {
        let record = normalize_submission(raw);
        self.store(&record, "submit")
    }

    /// Stores the canned sample response used for smoke checks.
    pub fn insert_sample(&self) -> RepoResult<ResponseId> {
        self.store(&sample_response(), "sample")
    }

    /// Summarizes every stored response.
    ///
    /// # Errors
    /// Returns the repository error when records could not be read; an
    /// empty store is `Ok(SurveyReport::NoData)`.
    pub fn report(&self) -> RepoResult<SurveyReport> {
        let started_at = Instant::now();
        let records = match self.repo.list_responses() {
            Ok(records) => records,
            Err(err) => {
                error!(
                    "event=survey_report module=service status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err);
            }
        };

        let report = summarize_with(&records, &self.options);
        info!(
            "event=survey_report module=service status=ok records={} no_data={} tag_match={} duration_ms={}",
            records.len(),
            report.is_no_data(),
            self.options.tag_match.as_str(),
            started_at.elapsed().as_millis()
        );
        Ok(report)
    }

    fn store(&self, record: &NewSurveyResponse, source: &str) -> RepoResult<ResponseId> {
        let started_at = Instant::now();
        match self.repo.insert_response(record) {
            Ok(id) => {
                info!(
                    "event=survey_submit module=service status=ok source={} response_id={} duration_ms={}",
                    source,
                    id,
                    started_at.elapsed().as_millis()
                );
                Ok(id)
            }
            Err(err) => {
                error!(
                    "event=survey_submit module=service status=error source={} duration_ms={} error={}",
                    source,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

/// Fixed sample row used by the `seed` smoke path.
pub fn sample_response() -> NewSurveyResponse {
    NewSurveyResponse {
        name: Some("Test".to_string()),
        email: Some("test@example.com".to_string()),
        age: Some("30".to_string()),
        date: Some("1994-01-01".to_string()),
        foods: "Pizza,Pasta".to_string(),
        eat_out: Some("3".to_string()),
        watch_movies: Some("4".to_string()),
        listen_radio: Some("2".to_string()),
        watch_tv: Some("5".to_string()),
    }
}
