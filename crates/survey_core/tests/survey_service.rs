use survey_core::db::{open_db, open_db_in_memory, DbError};
use survey_core::{
    render_report_text, AggregateOptions, FoodTag, NewSurveyResponse, RatingField, RawSubmission,
    RepoError, RepoResult, ResponseId, SqliteSurveyRepository, SurveyReport, SurveyRepository,
    SurveyResponse, SurveyService, TagMatchMode, NO_DATA_MESSAGE,
};

/// Store double that rejects every call.
struct UnavailableStore;

impl SurveyRepository for UnavailableStore {
    fn insert_response(&self, _response: &NewSurveyResponse) -> RepoResult<ResponseId> {
        Err(unavailable())
    }

    fn list_responses(&self) -> RepoResult<Vec<SurveyResponse>> {
        Err(unavailable())
    }

    fn get_response(&self, _id: ResponseId) -> RepoResult<Option<SurveyResponse>> {
        Err(unavailable())
    }

    fn count_responses(&self) -> RepoResult<u64> {
        Err(unavailable())
    }
}

fn unavailable() -> RepoError {
    RepoError::Db(DbError::Sqlite(rusqlite::Error::InvalidQuery))
}

fn submission(age: &str, food: Vec<&str>) -> RawSubmission {
    RawSubmission::new()
        .with("name", "Respondent")
        .with("email", "respondent@example.com")
        .with("age", age)
        .with("date", "2024-05-01")
        .with("food", food)
        .with("eatOut", "3")
        .with("watchMovies", "4")
        .with("listenRadio", "2")
        .with("watchTV", "5")
}

#[test]
fn report_on_empty_store_is_no_data() {
    let conn = open_db_in_memory().unwrap();
    let service = SurveyService::new(SqliteSurveyRepository::new(&conn));

    let report = service.report().unwrap();
    assert_eq!(report, SurveyReport::NoData);
    assert_eq!(render_report_text(&report), NO_DATA_MESSAGE);
}

#[test]
fn submitted_ages_drive_age_statistics() {
    let conn = open_db_in_memory().unwrap();
    let service = SurveyService::new(SqliteSurveyRepository::new(&conn));

    for age in ["20", "30", "40"] {
        service.submit(&submission(age, vec!["Pizza"])).unwrap();
    }

    let report = service.report().unwrap();
    let age = report.summary().unwrap().age.unwrap();
    assert_eq!(age.average_age, 30.0);
    assert_eq!(age.oldest, 40);
    assert_eq!(age.youngest, 20);
}

#[test]
fn submitted_foods_drive_food_percentages() {
    let conn = open_db_in_memory().unwrap();
    let service = SurveyService::new(SqliteSurveyRepository::new(&conn));

    service.submit(&submission("20", vec!["Pizza", "Pasta"])).unwrap();
    service.submit(&submission("30", vec!["Pizza"])).unwrap();
    service.submit(&RawSubmission::new().with("age", "40").with("food", "Pasta")).unwrap();

    let report = service.report().unwrap();
    let summary = report.summary().unwrap();
    assert_eq!(summary.food(FoodTag::Pizza).unwrap().count, 2);
    assert_eq!(summary.food(FoodTag::Pizza).unwrap().percent, 66.7);
    assert_eq!(summary.food(FoodTag::Pasta).unwrap().count, 2);
    assert_eq!(summary.food(FoodTag::Pasta).unwrap().percent, 66.7);

    let text = render_report_text(&report);
    assert!(text.contains("Percentage who like Pizza: 66.7%"));
}

#[test]
fn invalid_rating_submission_reports_zero_average() {
    let conn = open_db_in_memory().unwrap();
    let service = SurveyService::new(SqliteSurveyRepository::new(&conn));

    service
        .submit(&RawSubmission::new().with("age", "33").with("eatOut", "x"))
        .unwrap();

    let report = service.report().unwrap();
    assert_eq!(report.summary().unwrap().rating(RatingField::EatOut), Some(0.0));
    assert!(render_report_text(&report).contains("Average rating - Eating Out: 0.0"));
}

#[test]
fn submit_returns_increasing_ids_and_persists_joined_foods() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSurveyRepository::new(&conn);
    let service = SurveyService::new(SqliteSurveyRepository::new(&conn));

    let first = service.submit(&submission("20", vec!["Pizza", "Pap and Wors"])).unwrap();
    let second = service.submit(&RawSubmission::new()).unwrap();
    assert!(first < second);

    assert_eq!(
        repo.get_response(first).unwrap().unwrap().fields.foods,
        "Pizza,Pap and Wors"
    );
    assert_eq!(repo.get_response(second).unwrap().unwrap().fields.foods, "");
}

#[test]
fn sample_insert_is_reported() {
    let conn = open_db_in_memory().unwrap();
    let service = SurveyService::new(SqliteSurveyRepository::new(&conn));

    service.insert_sample().unwrap();
    let report = service.report().unwrap();
    let summary = report.summary().unwrap();

    assert_eq!(summary.total, 1);
    assert_eq!(summary.food(FoodTag::Pizza).unwrap().percent, 100.0);
    assert_eq!(summary.food(FoodTag::PapAndWors).unwrap().percent, 0.0);
    assert_eq!(summary.rating(RatingField::WatchTv), Some(5.0));
}

#[test]
fn exact_tag_matching_is_configurable() {
    let conn = open_db_in_memory().unwrap();
    let service = SurveyService::with_options(
        SqliteSurveyRepository::new(&conn),
        AggregateOptions {
            tag_match: TagMatchMode::Exact,
        },
    );

    service.submit(&submission("20", vec!["Pizza slice"])).unwrap();
    let report = service.report().unwrap();
    assert_eq!(report.summary().unwrap().food(FoodTag::Pizza).unwrap().count, 0);
}

#[test]
fn store_failures_are_distinct_from_no_data() {
    let service = SurveyService::new(UnavailableStore);

    assert!(matches!(
        service.submit(&submission("20", vec!["Pizza"])),
        Err(RepoError::Db(_))
    ));
    assert!(service.report().is_err());
}

#[test]
fn responses_survive_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.db");

    {
        let conn = open_db(&path).unwrap();
        let service = SurveyService::new(SqliteSurveyRepository::new(&conn));
        service.submit(&submission("25", vec!["Pasta"])).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let service = SurveyService::new(SqliteSurveyRepository::new(&conn));
    let report = service.report().unwrap();
    assert_eq!(report.summary().unwrap().total, 1);
}
