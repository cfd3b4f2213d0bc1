//! Survey repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Append survey responses and read them back in creation order.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Writes store field values exactly as given; no coercion happens here.
//! - Reads return rows ordered by `id ASC`.
//! - Store failures surface as `RepoError`, distinct from an empty result.

use crate::db::DbError;
use crate::model::response::{NewSurveyResponse, ResponseId, SurveyResponse};
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const SURVEY_SELECT_SQL: &str = "SELECT
    id,
    name,
    email,
    age,
    date,
    foods,
    watchMovies,
    listenRadio,
    eatOut,
    watchTV
FROM survey";

pub type RepoResult<T> = Result<T, RepoError>;

/// Store failure for survey persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted survey data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable append-only store of survey responses.
pub trait SurveyRepository {
    /// Appends one response and returns its store-assigned identity.
    fn insert_response(&self, response: &NewSurveyResponse) -> RepoResult<ResponseId>;
    /// Returns every stored response in creation order.
    fn list_responses(&self) -> RepoResult<Vec<SurveyResponse>>;
    fn get_response(&self, id: ResponseId) -> RepoResult<Option<SurveyResponse>>;
    fn count_responses(&self) -> RepoResult<u64>;
}

/// SQLite-backed survey repository borrowing a per-request connection.
pub struct SqliteSurveyRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSurveyRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SurveyRepository for SqliteSurveyRepository<'_> {
    fn insert_response(&self, response: &NewSurveyResponse) -> RepoResult<ResponseId> {
        self.conn.execute(
            "INSERT INTO survey (
                name,
                email,
                age,
                date,
                foods,
                eatOut,
                watchMovies,
                listenRadio,
                watchTV
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                response.name.as_deref(),
                response.email.as_deref(),
                response.age.as_deref(),
                response.date.as_deref(),
                response.foods.as_str(),
                response.eat_out.as_deref(),
                response.watch_movies.as_deref(),
                response.listen_radio.as_deref(),
                response.watch_tv.as_deref(),
            ],
        )?;

        Ok(ResponseId(self.conn.last_insert_rowid()))
    }

    fn list_responses(&self) -> RepoResult<Vec<SurveyResponse>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SURVEY_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut responses = Vec::new();

        while let Some(row) = rows.next()? {
            responses.push(parse_survey_row(row)?);
        }

        Ok(responses)
    }

    fn get_response(&self, id: ResponseId) -> RepoResult<Option<SurveyResponse>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SURVEY_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id.0])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_survey_row(row)?));
        }

        Ok(None)
    }

    fn count_responses(&self) -> RepoResult<u64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM survey;", [], |row| row.get::<_, i64>(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative survey row count `{count}`")))
    }
}

fn parse_survey_row(row: &Row<'_>) -> RepoResult<SurveyResponse> {
    let id = ResponseId(row.get("id")?);
    let fields = NewSurveyResponse {
        name: column_text(row, "name")?,
        email: column_text(row, "email")?,
        age: column_text(row, "age")?,
        date: column_text(row, "date")?,
        // Rows written outside this core may carry NULL foods.
        foods: column_text(row, "foods")?.unwrap_or_default(),
        eat_out: column_text(row, "eatOut")?,
        watch_movies: column_text(row, "watchMovies")?,
        listen_radio: column_text(row, "listenRadio")?,
        watch_tv: column_text(row, "watchTV")?,
    };
    Ok(SurveyResponse::new(id, fields))
}

/// Reads any scalar column as its text form.
///
/// Column affinity may have turned submitted text into INTEGER or REAL.
fn column_text(row: &Row<'_>, column: &str) -> RepoResult<Option<String>> {
    match row.get_ref(column)? {
        ValueRef::Null => Ok(None),
        ValueRef::Integer(value) => Ok(Some(value.to_string())),
        ValueRef::Real(value) => Ok(Some(value.to_string())),
        ValueRef::Text(bytes) => String::from_utf8(bytes.to_vec())
            .map(Some)
            .map_err(|_| RepoError::InvalidData(format!("non UTF-8 text in survey.{column}"))),
        ValueRef::Blob(_) => Err(RepoError::InvalidData(format!(
            "unexpected blob value in survey.{column}"
        ))),
    }
}
