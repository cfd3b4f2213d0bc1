//! Request-handler API over the survey core.
//!
//! # Responsibility
//! - Expose submit/report/seed use-cases with user-facing messages.
//! - Open one store connection per call and release it on return.
//!
//! # Invariants
//! - Functions never panic; failures become `ok = false` envelopes.
//! - A store failure is never reported as "no data".

use survey_core::db::open_db;
use survey_core::{
    render_report_text, RawSubmission, RepoResult, SqliteSurveyRepository, SurveyConfig,
    SurveyReport, SurveyService,
};

pub const SUBMIT_OK_MESSAGE: &str = "Thank you for your submission!";
pub const SEED_OK_MESSAGE: &str = "Insert successful";

/// Outcome of a write request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Store-assigned id of the saved response.
    pub response_id: Option<i64>,
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, response_id: i64) -> Self {
        Self {
            ok: true,
            response_id: Some(response_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            response_id: None,
            message: message.into(),
        }
    }
}

/// Outcome of a report request.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportResponse {
    pub ok: bool,
    /// `None` only when the report could not be produced.
    pub report: Option<SurveyReport>,
    /// Rendered report text, the no-data message, or the failure cause.
    pub message: String,
}

/// Normalizes and stores one submission.
pub fn submit(config: &SurveyConfig, raw: &RawSubmission) -> ActionResponse {
    match with_survey_service(config, |service| service.submit(raw)) {
        Ok(id) => ActionResponse::success(SUBMIT_OK_MESSAGE, id.0),
        Err(err) => ActionResponse::failure(format!(
            "Error saving survey: submission was not saved ({err})"
        )),
    }
}

/// Parses a JSON object payload and stores it.
pub fn submit_json(config: &SurveyConfig, payload: &str) -> ActionResponse {
    match serde_json::from_str::<RawSubmission>(payload) {
        Ok(raw) => submit(config, &raw),
        Err(err) => ActionResponse::failure(format!(
            "Error saving survey: submission was not saved (invalid JSON payload: {err})"
        )),
    }
}

/// Stores the canned sample response.
pub fn seed(config: &SurveyConfig) -> ActionResponse {
    match with_survey_service(config, |service| service.insert_sample()) {
        Ok(id) => ActionResponse::success(SEED_OK_MESSAGE, id.0),
        Err(err) => ActionResponse::failure(format!("Insert failed ({err})")),
    }
}

/// Summarizes every stored response.
pub fn report(config: &SurveyConfig) -> ReportResponse {
    match with_survey_service(config, |service| service.report()) {
        Ok(report) => ReportResponse {
            ok: true,
            message: render_report_text(&report),
            report: Some(report),
        },
        Err(err) => ReportResponse {
            ok: false,
            report: None,
            message: format!("Report unavailable: {err}"),
        },
    }
}

fn with_survey_service<T>(
    config: &SurveyConfig,
    f: impl FnOnce(&SurveyService<SqliteSurveyRepository<'_>>) -> RepoResult<T>,
) -> Result<T, String> {
    let conn = open_db(&config.db_path).map_err(|err| format!("store open failed: {err}"))?;
    let service = SurveyService::with_options(
        SqliteSurveyRepository::new(&conn),
        config.aggregate_options(),
    );
    f(&service).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{report, seed, submit, submit_json, SEED_OK_MESSAGE, SUBMIT_OK_MESSAGE};
    use survey_core::{FoodTag, RawSubmission, SurveyConfig, SurveyReport, NO_DATA_MESSAGE};
    use tempfile::TempDir;

    fn temp_config() -> (TempDir, SurveyConfig) {
        let dir = tempfile::tempdir().unwrap();
        let config = SurveyConfig {
            db_path: dir.path().join("survey.db"),
            ..SurveyConfig::default()
        };
        (dir, config)
    }

    #[test]
    fn report_on_fresh_store_shows_no_data_message() {
        let (_dir, config) = temp_config();
        let response = report(&config);

        assert!(response.ok);
        assert_eq!(response.report, Some(SurveyReport::NoData));
        assert_eq!(response.message, NO_DATA_MESSAGE);
    }

    #[test]
    fn submit_then_report_includes_submission() {
        let (_dir, config) = temp_config();
        let raw = RawSubmission::from_pairs([
            ("age", "28"),
            ("food", "Pizza"),
            ("food", "Pap and Wors"),
            ("watchTV", "4"),
        ]);

        let saved = submit(&config, &raw);
        assert!(saved.ok, "{}", saved.message);
        assert_eq!(saved.message, SUBMIT_OK_MESSAGE);
        assert!(saved.response_id.is_some());

        let response = report(&config);
        let summary = response.report.as_ref().and_then(|r| r.summary()).unwrap();
        assert_eq!(summary.food(FoodTag::PapAndWors).unwrap().percent, 100.0);
        assert!(response.message.contains("Total number of surveys: 1"));
    }

    #[test]
    fn submit_json_rejects_malformed_payload_as_not_saved() {
        let (_dir, config) = temp_config();
        let response = submit_json(&config, "{not json");

        assert!(!response.ok);
        assert!(response.message.contains("not saved"));
    }

    #[test]
    fn seed_inserts_sample_row() {
        let (_dir, config) = temp_config();
        let response = seed(&config);
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.message, SEED_OK_MESSAGE);

        assert!(report(&config).message.contains("Average Age: 30.0"));
    }

    #[test]
    fn unreachable_store_is_reported_as_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a database file.
        let config = SurveyConfig {
            db_path: dir.path().to_path_buf(),
            ..SurveyConfig::default()
        };

        let saved = submit(&config, &RawSubmission::new().with("age", "20"));
        assert!(!saved.ok);
        assert!(saved.message.contains("not saved"));

        let response = report(&config);
        assert!(!response.ok);
        assert_eq!(response.report, None);
        assert!(response.message.starts_with("Report unavailable"));
    }
}
