//! Canonical movie record schema
//!
//! Every optional field uses `skip_serializing_if` so that an absent value is
//! omitted from output entirely: presence of a key always implies a known
//! value, never a placeholder.

use serde::{Deserialize, Serialize};

/// Critic-side rating fields
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CriticRatings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_ratings: Option<i64>,
}

/// Audience-side rating fields
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AudienceRatings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_ratings: Option<i64>,
}

/// Ratings grouped by origin
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ratings {
    #[serde(default)]
    pub critic: CriticRatings,
    #[serde(default)]
    pub audience: AudienceRatings,
}

/// Box office and spend figures, whole US dollars
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Financials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domestic_box_office_usd: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worldwide_box_office_usd: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_budget_usd: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_spend_usd: Option<i64>,
}

/// One provider row normalized into the shared schema.
///
/// `movie_title` is always non-empty; `provider` names the originating feed
/// (derived from the source filename, e.g. `provider3_domestic`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub movie_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub ratings: Ratings,
    #[serde(default)]
    pub financials: Financials,
    pub provider: String,
}

impl CanonicalRecord {
    /// Create a record with the required fields; everything else starts absent
    pub fn new(movie_title: String, provider: String) -> Self {
        Self {
            movie_title,
            release_year: None,
            ratings: Ratings::default(),
            financials: Financials::default(),
            provider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_omitted_from_json() {
        let record = CanonicalRecord::new("Inception".to_string(), "provider1".to_string());
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains("\"movie_title\":\"Inception\""));
        assert!(!json.contains("release_year"));
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_present_fields_serialize() {
        let mut record = CanonicalRecord::new("Arrival".to_string(), "provider2".to_string());
        record.release_year = Some(2016);
        record.ratings.audience.score = Some(8.2);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["release_year"], 2016);
        assert_eq!(value["ratings"]["audience"]["score"], 8.2);
        assert!(value["ratings"]["critic"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_round_trips_through_json() {
        let mut record = CanonicalRecord::new("Heat".to_string(), "provider3".to_string());
        record.release_year = Some(1995);
        record.financials.production_budget_usd = Some(60_000_000);

        let json = serde_json::to_string(&record).unwrap();
        let back: CanonicalRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
