//! Survey aggregator.
//!
//! # Responsibility
//! - Reduce the complete ordered record set into a `SurveyReport`.
//!
//! # Invariants
//! - Aggregation is a pure function of its input and never fails.
//! - Empty input short-circuits to `SurveyReport::NoData`; no division by a
//!   zero total is ever attempted.
//! - Ratings are coerced with `coerce_rating`; ages are not coerced.

use crate::model::response::SurveyResponse;
use crate::model::summary::{
    AgeStats, FoodStat, FoodTag, RatingField, RatingStat, SurveyReport, SurveySummary,
};
use crate::stats::coerce::{coerce_rating, parse_age, round_one_decimal};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// How a tracked tag is matched against a stored `foods` string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagMatchMode {
    /// The tag label appears anywhere in `foods`.
    #[default]
    Substring,
    /// The tag label equals one of the `,`-separated (trimmed) entries.
    Exact,
}

impl TagMatchMode {
    pub fn matches(self, foods: &str, tag: FoodTag) -> bool {
        match self {
            Self::Substring => foods.contains(tag.label()),
            Self::Exact => foods.split(',').any(|entry| entry.trim() == tag.label()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::Exact => "exact",
        }
    }
}

/// Unrecognized tag matching mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTagMatchMode(pub String);

impl Display for UnknownTagMatchMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported tag match mode `{}`; expected substring|exact",
            self.0
        )
    }
}

impl Error for UnknownTagMatchMode {}

impl FromStr for TagMatchMode {
    type Err = UnknownTagMatchMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "exact" => Ok(Self::Exact),
            other => Err(UnknownTagMatchMode(other.to_string())),
        }
    }
}

/// Knobs for `summarize_with`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateOptions {
    pub tag_match: TagMatchMode,
}

/// Summarizes records with default options (substring tag matching).
pub fn summarize(records: &[SurveyResponse]) -> SurveyReport {
    summarize_with(records, &AggregateOptions::default())
}

/// Summarizes records with explicit options.
pub fn summarize_with(records: &[SurveyResponse], options: &AggregateOptions) -> SurveyReport {
    if records.is_empty() {
        return SurveyReport::NoData;
    }
    let total = records.len();

    let foods = FoodTag::ALL
        .iter()
        .map(|&tag| {
            let count = records
                .iter()
                .filter(|record| options.tag_match.matches(&record.fields.foods, tag))
                .count();
            FoodStat {
                tag,
                count,
                percent: percent_of(count, total),
            }
        })
        .collect();

    let ratings = RatingField::ALL
        .iter()
        .map(|&field| {
            let sum: i128 = records
                .iter()
                .map(|record| i128::from(coerce_rating(rating_value(record, field))))
                .sum();
            RatingStat {
                field,
                average: average_of(sum, total),
            }
        })
        .collect();

    SurveyReport::Summary(SurveySummary {
        total,
        age: age_stats(records),
        foods,
        ratings,
    })
}

fn age_stats(records: &[SurveyResponse]) -> Option<AgeStats> {
    let mut sum: i128 = 0;
    let mut oldest = i64::MIN;
    let mut youngest = i64::MAX;

    for record in records {
        // One unreadable age invalidates all age statistics.
        let age = parse_age(record.fields.age.as_deref())?;
        sum += i128::from(age);
        oldest = oldest.max(age);
        youngest = youngest.min(age);
    }

    Some(AgeStats {
        average_age: average_of(sum, records.len()),
        oldest,
        youngest,
    })
}

fn rating_value(record: &SurveyResponse, field: RatingField) -> Option<&str> {
    let fields = &record.fields;
    match field {
        RatingField::WatchMovies => fields.watch_movies.as_deref(),
        RatingField::ListenRadio => fields.listen_radio.as_deref(),
        RatingField::EatOut => fields.eat_out.as_deref(),
        RatingField::WatchTv => fields.watch_tv.as_deref(),
    }
}

fn percent_of(count: usize, total: usize) -> f64 {
    round_one_decimal(100.0 * count as f64 / total as f64)
}

fn average_of(sum: i128, total: usize) -> f64 {
    round_one_decimal(sum as f64 / total as f64)
}
