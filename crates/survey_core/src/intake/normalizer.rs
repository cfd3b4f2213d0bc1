//! Record normalizer for raw survey submissions.
//!
//! # Responsibility
//! - Map form field names onto the stored record shape.
//! - Join multi-select `food` input into the comma-joined `foods` column.
//!
//! # Invariants
//! - Normalization never fails and never validates.
//! - Absent `food` yields an empty `foods` string.
//! - Values other than `food` are passed through raw; a field delivered as
//!   a sequence is joined with `,` the same way `food` is.

use crate::model::response::{NewSurveyResponse, RawSubmission};

/// Form field carrying the multi-select food choices.
pub const FOOD_FIELD: &str = "food";
/// Separator used when joining multi-valued fields.
pub const FOODS_SEPARATOR: &str = ",";

/// Converts a raw submission into a record ready for insertion.
///
/// Unknown keys are ignored.
pub fn normalize_submission(raw: &RawSubmission) -> NewSurveyResponse {
    let text = |key: &str| raw.get(key).map(|value| value.joined());

    NewSurveyResponse {
        name: text("name"),
        email: text("email"),
        age: text("age"),
        date: text("date"),
        foods: text(FOOD_FIELD).unwrap_or_default(),
        eat_out: text("eatOut"),
        watch_movies: text("watchMovies"),
        listen_radio: text("listenRadio"),
        watch_tv: text("watchTV"),
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_submission;
    use crate::model::response::RawSubmission;

    #[test]
    fn food_sequence_joins_in_given_order() {
        let raw = RawSubmission::new().with("food", vec!["Pasta", "Pizza", "Pasta"]);
        assert_eq!(normalize_submission(&raw).foods, "Pasta,Pizza,Pasta");
    }

    #[test]
    fn empty_food_sequence_yields_empty_string() {
        let raw = RawSubmission::new().with("food", Vec::<String>::new());
        assert_eq!(normalize_submission(&raw).foods, "");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let raw = RawSubmission::new()
            .with("favouriteColour", "green")
            .with("name", "Thandi");
        let record = normalize_submission(&raw);
        assert_eq!(record.name.as_deref(), Some("Thandi"));
        assert_eq!(record.email, None);
    }
}
