//! Provider schema normalization
//!
//! Maps one provider's raw row into the canonical record shape. The mapping
//! is provider-agnostic and data-driven: each canonical attribute has a
//! fixed list of accepted spellings, consulted case-insensitively, and the
//! first alias present with a usable value wins. Unrecognized raw fields
//! are dropped silently. A value that fails numeric coercion drops that
//! single field; the row itself fails only when no usable title is found.

use crate::error::NormalizeError;
use lazy_static::lazy_static;
use reel_domain::{CanonicalRecord, RawRecord, SourceFormat};
use regex::Regex;
use serde_json::Value;

/// Accepted provider spellings per canonical attribute.
///
/// Onboarding a new provider is an edit here, not a code change elsewhere.
pub mod aliases {
    pub const MOVIE_TITLE: &[&str] = &["movie_title", "title", "name", "film_name"];
    pub const RELEASE_YEAR: &[&str] = &["release_year", "year", "year_of_release"];

    pub const CRITIC_SCORE: &[&str] = &["critic_score_percentage", "critic_score"];
    pub const CRITIC_TOP_SCORE: &[&str] = &["top_critic_score"];
    pub const CRITIC_TOTAL_RATINGS: &[&str] =
        &["total_critic_reviews_counted", "total_critic_ratings"];

    pub const AUDIENCE_SCORE: &[&str] = &["audience_average_score", "audience_avg_score"];
    pub const AUDIENCE_TOTAL_RATINGS: &[&str] = &["total_audience_ratings"];

    pub const DOMESTIC_BOX_OFFICE: &[&str] =
        &["domestic_box_office_gross", "domestic_box_office_usd"];
    pub const WORLDWIDE_BOX_OFFICE: &[&str] = &[
        "worldwide_box_office_gross",
        "box_office_gross_usd",
        "worldwide_box_office_usd",
    ];
    pub const PRODUCTION_BUDGET: &[&str] = &["production_budget_usd", "production_budget"];
    pub const MARKETING_SPEND: &[&str] = &["marketing_spend_usd", "marketing_spend"];
}

lazy_static! {
    /// A standalone four-digit run, e.g. "2010" in "(2010)" or "2010-05-16"
    static ref YEAR_RE: Regex = Regex::new(r"\b\d{4}\b").unwrap();
}

/// Normalize one raw provider row into a canonical record.
///
/// Pure transformation: no side effects beyond the returned record. Fails
/// only with [`NormalizeError::MissingTitle`]; every other problem just
/// leaves the affected field absent.
pub fn normalize(
    raw: &RawRecord,
    provider_id: &str,
    format: SourceFormat,
) -> Result<CanonicalRecord, NormalizeError> {
    tracing::trace!("Normalizing {} row from {}", format, provider_id);

    let movie_title = raw
        .first_of(aliases::MOVIE_TITLE)
        .and_then(value_as_string)
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
        .ok_or_else(|| NormalizeError::MissingTitle {
            provider: provider_id.to_string(),
        })?;

    let mut record = CanonicalRecord::new(movie_title, provider_id.to_string());
    record.release_year = raw.first_of(aliases::RELEASE_YEAR).and_then(value_as_year);

    record.ratings.critic.score = raw.first_of(aliases::CRITIC_SCORE).and_then(value_as_f64);
    record.ratings.critic.top_score = raw
        .first_of(aliases::CRITIC_TOP_SCORE)
        .and_then(value_as_f64);
    record.ratings.critic.total_ratings = raw
        .first_of(aliases::CRITIC_TOTAL_RATINGS)
        .and_then(value_as_i64);

    record.ratings.audience.score = raw.first_of(aliases::AUDIENCE_SCORE).and_then(value_as_f64);
    record.ratings.audience.total_ratings = raw
        .first_of(aliases::AUDIENCE_TOTAL_RATINGS)
        .and_then(value_as_i64);

    record.financials.domestic_box_office_usd = raw
        .first_of(aliases::DOMESTIC_BOX_OFFICE)
        .and_then(value_as_i64);
    record.financials.worldwide_box_office_usd = raw
        .first_of(aliases::WORLDWIDE_BOX_OFFICE)
        .and_then(value_as_i64);
    record.financials.production_budget_usd = raw
        .first_of(aliases::PRODUCTION_BUDGET)
        .and_then(value_as_i64);
    record.financials.marketing_spend_usd = raw
        .first_of(aliases::MARKETING_SPEND)
        .and_then(value_as_i64);

    Ok(record)
}

/// Titles may arrive as strings or, rarely, bare numbers ("1917")
fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numbers pass through; numeric strings parse, surrounding whitespace
/// tolerated. Anything else is absent.
fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Integer coercion, accepting float-shaped input with a zero fraction
fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_to_i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_to_i64))
        }
        _ => None,
    }
}

fn whole_to_i64(f: f64) -> Option<i64> {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// A four-digit year: an in-range integer, or the first standalone
/// four-digit run in a string. Anything else is absent.
fn value_as_year(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .filter(|year| (1000..=9999).contains(year))
            .map(|year| year as i32),
        Value::String(s) => YEAR_RE
            .find(s)
            .and_then(|m| m.as_str().parse::<i32>().ok()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn raw(pairs: &[(&str, Value)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_maps_aliases_to_canonical_fields() {
        let row = raw(&[
            ("film_name", json!("  Inception ")),
            ("year_of_release", json!("2010")),
            ("critic_score_percentage", json!("87")),
            ("total_critic_reviews_counted", json!("412")),
        ]);

        let record = normalize(&row, "provider1_critics", SourceFormat::Csv).unwrap();
        assert_eq!(record.movie_title, "Inception");
        assert_eq!(record.release_year, Some(2010));
        assert_eq!(record.ratings.critic.score, Some(87.0));
        assert_eq!(record.ratings.critic.total_ratings, Some(412));
        assert_eq!(record.provider, "provider1_critics");
    }

    #[test]
    fn test_field_lookup_is_case_insensitive() {
        let row = raw(&[("Movie_Title", json!("Heat")), ("YEAR", json!(1995))]);

        let record = normalize(&row, "provider2", SourceFormat::Json).unwrap();
        assert_eq!(record.movie_title, "Heat");
        assert_eq!(record.release_year, Some(1995));
    }

    #[test]
    fn test_unrecognized_fields_are_dropped() {
        let row = raw(&[
            ("title", json!("Arrival")),
            ("studio_notes", json!("not a canonical field")),
        ]);

        let record = normalize(&row, "provider2", SourceFormat::Json).unwrap();
        assert_eq!(record.movie_title, "Arrival");
        assert_eq!(record.ratings, Default::default());
        assert_eq!(record.financials, Default::default());
    }

    #[test]
    fn test_missing_title_fails_the_row() {
        let row = raw(&[("year", json!(2010)), ("critic_score", json!(87))]);

        let err = normalize(&row, "provider1", SourceFormat::Csv).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::MissingTitle {
                provider: "provider1".to_string()
            }
        );
    }

    #[test]
    fn test_blank_title_fails_the_row() {
        let row = raw(&[("movie_title", json!("   "))]);

        assert!(normalize(&row, "provider1", SourceFormat::Csv).is_err());
    }

    #[test]
    fn test_bad_numeric_drops_only_that_field() {
        let row = raw(&[
            ("title", json!("Arrival")),
            ("critic_score", json!("not a number")),
            ("audience_average_score", json!("8.2")),
        ]);

        let record = normalize(&row, "provider2", SourceFormat::Csv).unwrap();
        assert_eq!(record.ratings.critic.score, None);
        assert_eq!(record.ratings.audience.score, Some(8.2));
    }

    #[test]
    fn test_unparseable_year_is_omitted() {
        let row = raw(&[("title", json!("Arrival")), ("year", json!("soon"))]);

        let record = normalize(&row, "provider2", SourceFormat::Csv).unwrap();
        assert_eq!(record.release_year, None);
    }

    #[test]
    fn test_year_extracted_from_longer_string() {
        let row = raw(&[("title", json!("Arrival")), ("year", json!("2016-11-11"))]);

        let record = normalize(&row, "provider2", SourceFormat::Csv).unwrap();
        assert_eq!(record.release_year, Some(2016));
    }

    #[test]
    fn test_numeric_title_is_kept() {
        let row = raw(&[("title", json!(1917)), ("year", json!(2019))]);

        let record = normalize(&row, "provider1", SourceFormat::Json).unwrap();
        assert_eq!(record.movie_title, "1917");
    }

    #[test_case(json!(87) => Some(87.0) ; "integer number")]
    #[test_case(json!(8.7) => Some(8.7) ; "float number")]
    #[test_case(json!(" 8.7 ") => Some(8.7) ; "padded string")]
    #[test_case(json!("n/a") => None ; "non numeric string")]
    #[test_case(json!(true) => None ; "boolean")]
    fn test_value_as_f64(value: Value) -> Option<f64> {
        value_as_f64(&value)
    }

    #[test_case(json!(60000000) => Some(60_000_000) ; "integer number")]
    #[test_case(json!(6.0e7) => Some(60_000_000) ; "whole float")]
    #[test_case(json!("60000000") => Some(60_000_000) ; "integer string")]
    #[test_case(json!(1.5) => None ; "fractional float")]
    #[test_case(json!("1.5") => None ; "fractional string")]
    fn test_value_as_i64(value: Value) -> Option<i64> {
        value_as_i64(&value)
    }

    #[test_case(json!(2010) => Some(2010) ; "four digit integer")]
    #[test_case(json!("2010") => Some(2010) ; "four digit string")]
    #[test_case(json!("(2010)") => Some(2010) ; "bracketed")]
    #[test_case(json!(10) => None ; "too few digits")]
    #[test_case(json!(12345) => None ; "too many digits")]
    #[test_case(json!("12345") => None ; "five digit run in string")]
    fn test_value_as_year(value: Value) -> Option<i32> {
        value_as_year(&value)
    }
}
