//! Plain-text rendering of survey reports.
//!
//! Numbers are always printed with exactly one decimal, so the output
//! matches the rounding contract of the aggregator.

use crate::model::summary::{SurveyReport, SurveySummary};
use std::fmt::Write;

/// Message shown instead of statistics when no records exist.
pub const NO_DATA_MESSAGE: &str = "No Surveys Available";
/// Placeholder for age statistics that could not be computed.
pub const UNAVAILABLE: &str = "n/a";

/// Renders a report as newline-separated lines.
pub fn render_report_text(report: &SurveyReport) -> String {
    match report {
        SurveyReport::NoData => NO_DATA_MESSAGE.to_string(),
        SurveyReport::Summary(summary) => render_summary(summary),
    }
}

fn render_summary(summary: &SurveySummary) -> String {
    let mut out = String::from("Survey Results\n");
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Total number of surveys: {}", summary.total);

    match &summary.age {
        Some(age) => {
            let _ = writeln!(out, "Average Age: {:.1}", age.average_age);
            let _ = writeln!(out, "Oldest person who participated: {}", age.oldest);
            let _ = writeln!(out, "Youngest person who participated: {}", age.youngest);
        }
        None => {
            let _ = writeln!(out, "Average Age: {UNAVAILABLE}");
            let _ = writeln!(out, "Oldest person who participated: {UNAVAILABLE}");
            let _ = writeln!(out, "Youngest person who participated: {UNAVAILABLE}");
        }
    }

    for food in &summary.foods {
        let _ = writeln!(
            out,
            "Percentage who like {}: {:.1}%",
            food.tag.label(),
            food.percent
        );
    }

    for rating in &summary.ratings {
        let _ = writeln!(
            out,
            "Average rating - {}: {:.1}",
            rating.field.label(),
            rating.average
        );
    }

    out
}
