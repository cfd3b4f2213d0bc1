//! Numeric coercion for raw stored values.
//!
//! # Invariants
//! - Rating coercion never fails: anything without a leading integer is 0.
//! - Age parsing is strict and has no default; callers decide what a
//!   missing age means.

/// Coerces a raw rating value to an integer, defaulting to 0.
///
/// Uses integer-prefix parsing: `"4.7"` is 4, `"3 stars"` is 3, `"x"` is 0.
pub fn coerce_rating(raw: Option<&str>) -> i64 {
    raw.and_then(parse_int_prefix).unwrap_or(0)
}

/// Parses the leading integer of `raw`.
///
/// Leading whitespace and one sign character are accepted. Returns `None`
/// when no digit follows, or when the digits overflow `i64`.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = unsigned
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }

    let magnitude = unsigned[..end].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parses a raw age value as a whole integer.
///
/// Surrounding whitespace is ignored; anything else (fractions, text,
/// missing values) yields `None`.
pub fn parse_age(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
}

/// Rounds to one decimal place, halves away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::{coerce_rating, parse_age, parse_int_prefix, round_one_decimal};

    #[test]
    fn coerce_rating_follows_integer_prefix_rules() {
        assert_eq!(coerce_rating(Some("3")), 3);
        assert_eq!(coerce_rating(Some("")), 0);
        assert_eq!(coerce_rating(None), 0);
        assert_eq!(coerce_rating(Some("abc")), 0);
        assert_eq!(coerce_rating(Some("4.7")), 4);
        assert_eq!(coerce_rating(Some(" 5")), 5);
        assert_eq!(coerce_rating(Some("2 out of 5")), 2);
        assert_eq!(coerce_rating(Some(".5")), 0);
    }

    #[test]
    fn parse_int_prefix_handles_signs() {
        assert_eq!(parse_int_prefix("-2"), Some(-2));
        assert_eq!(parse_int_prefix("+4"), Some(4));
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("--1"), None);
    }

    #[test]
    fn parse_int_prefix_rejects_overflow() {
        assert_eq!(parse_int_prefix("99999999999999999999"), None);
        assert_eq!(coerce_rating(Some("99999999999999999999")), 0);
    }

    #[test]
    fn parse_age_is_strict() {
        assert_eq!(parse_age(Some(" 42 ")), Some(42));
        assert_eq!(parse_age(Some("42.5")), None);
        assert_eq!(parse_age(Some("forty")), None);
        assert_eq!(parse_age(None), None);
    }

    #[test]
    fn round_one_decimal_rounds_half_away_from_zero() {
        assert_eq!(round_one_decimal(200.0 / 3.0), 66.7);
        assert_eq!(round_one_decimal(100.0 / 3.0), 33.3);
        assert_eq!(round_one_decimal(2.25), 2.3);
        assert_eq!(round_one_decimal(-2.25), -2.3);
        assert_eq!(round_one_decimal(30.0), 30.0);
    }
}
