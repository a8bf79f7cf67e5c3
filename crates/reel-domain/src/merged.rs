//! The unified movie record assembled across providers

use crate::canonical::{Financials, Ratings};
use serde::{Deserialize, Serialize};

/// One movie unified across every provider that described it.
///
/// `providers` is provenance: the distinct provider ids that contributed a
/// record to this movie's identity group, in the order they were first seen.
/// The list is never re-sorted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    pub movie_id: String,
    pub movie_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub ratings: Ratings,
    #[serde(default)]
    pub financials: Financials,
    pub providers: Vec<String>,
}
