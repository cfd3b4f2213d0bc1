//! Survey response domain model.
//!
//! # Responsibility
//! - Define the stored record shape shared by the normalizer, the store and
//!   the aggregator.
//! - Define the raw submission payload delivered by the form layer.
//!
//! # Invariants
//! - Field values are kept raw; no numeric validation happens at write time.
//! - `foods` is always a comma-joined string, possibly empty.
//! - `ResponseId` is assigned by the store and never reused.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Store-assigned identity of a survey response.
///
/// Monotonic in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseId(pub i64);

impl Display for ResponseId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Survey response ready for insertion (no identity yet).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSurveyResponse {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Raw age as submitted. Not coerced anywhere.
    pub age: Option<String>,
    /// Free-form date text.
    pub date: Option<String>,
    /// Selected food tags joined with `,`.
    pub foods: String,
    pub eat_out: Option<String>,
    pub watch_movies: Option<String>,
    pub listen_radio: Option<String>,
    #[serde(rename = "watchTV")]
    pub watch_tv: Option<String>,
}

/// Stored survey response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub id: ResponseId,
    #[serde(flatten)]
    pub fields: NewSurveyResponse,
}

impl SurveyResponse {
    pub fn new(id: ResponseId, fields: NewSurveyResponse) -> Self {
        Self { id, fields }
    }
}

/// One submitted form value.
///
/// Multi-select inputs arrive as `Multiple`, everything else as `Single`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FieldValue {
    /// Flattens the value into one string, joining sequences with `,`.
    pub fn joined(&self) -> String {
        match self {
            Self::Single(value) => value.clone(),
            Self::Multiple(values) => values.join(","),
        }
    }

    fn push(&mut self, value: String) {
        match self {
            Self::Single(existing) => {
                let first = std::mem::take(existing);
                *self = Self::Multiple(vec![first, value]);
            }
            Self::Multiple(values) => values.push(value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

/// Raw submission payload: form field name to submitted value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawSubmission {
    fields: BTreeMap<String, FieldValue>,
}

impl RawSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a payload from `key=value` pairs in body order.
    ///
    /// A key seen more than once becomes a `FieldValue::Multiple` holding
    /// every value in the order given.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields: BTreeMap<String, FieldValue> = BTreeMap::new();
        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();
            match fields.get_mut(&key) {
                Some(existing) => existing.push(value),
                None => {
                    fields.insert(key, FieldValue::Single(value));
                }
            }
        }
        Self { fields }
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
