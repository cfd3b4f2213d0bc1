//! Derived report model.
//!
//! # Invariants
//! - A summary is computed fresh per report and never persisted.
//! - `SurveyReport::NoData` is the only outcome for an empty record set;
//!   a `SurveySummary` always has `total >= 1`.
//! - Every `percent` and `average` is rounded to one decimal place.

use serde::Serialize;

/// Food labels counted in the summary.
///
/// The vocabulary is closed; adding a label here adds a summary row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FoodTag {
    Pizza,
    Pasta,
    #[serde(rename = "Pap and Wors")]
    PapAndWors,
}

impl FoodTag {
    pub const ALL: [FoodTag; 3] = [FoodTag::Pizza, FoodTag::Pasta, FoodTag::PapAndWors];

    /// Label as it appears in the stored `foods` string.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pizza => "Pizza",
            Self::Pasta => "Pasta",
            Self::PapAndWors => "Pap and Wors",
        }
    }
}

/// Rating fields averaged in the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RatingField {
    WatchMovies,
    ListenRadio,
    EatOut,
    #[serde(rename = "watchTV")]
    WatchTv,
}

impl RatingField {
    /// Report order.
    pub const ALL: [RatingField; 4] = [
        RatingField::WatchMovies,
        RatingField::ListenRadio,
        RatingField::EatOut,
        RatingField::WatchTv,
    ];

    /// Form/column name of the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::WatchMovies => "watchMovies",
            Self::ListenRadio => "listenRadio",
            Self::EatOut => "eatOut",
            Self::WatchTv => "watchTV",
        }
    }

    /// Human-readable activity name.
    pub fn label(self) -> &'static str {
        match self {
            Self::WatchMovies => "Watching Movies",
            Self::ListenRadio => "Listening to Radio",
            Self::EatOut => "Eating Out",
            Self::WatchTv => "Watching TV",
        }
    }
}

/// Age statistics over every record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeStats {
    pub average_age: f64,
    pub oldest: i64,
    pub youngest: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodStat {
    pub tag: FoodTag,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingStat {
    pub field: RatingField,
    pub average: f64,
}

/// Statistics over a non-empty record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveySummary {
    pub total: usize,
    /// `None` when at least one record has a missing or non-integer age.
    pub age: Option<AgeStats>,
    /// One entry per `FoodTag::ALL`, same order.
    pub foods: Vec<FoodStat>,
    /// One entry per `RatingField::ALL`, same order.
    pub ratings: Vec<RatingStat>,
}

impl SurveySummary {
    pub fn food(&self, tag: FoodTag) -> Option<&FoodStat> {
        self.foods.iter().find(|stat| stat.tag == tag)
    }

    pub fn rating(&self, field: RatingField) -> Option<f64> {
        self.ratings
            .iter()
            .find(|stat| stat.field == field)
            .map(|stat| stat.average)
    }
}

/// Aggregation outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "summary", rename_all = "snake_case")]
pub enum SurveyReport {
    /// No records are stored yet.
    NoData,
    Summary(SurveySummary),
}

impl SurveyReport {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    pub fn summary(&self) -> Option<&SurveySummary> {
        match self {
            Self::NoData => None,
            Self::Summary(summary) => Some(summary),
        }
    }
}
