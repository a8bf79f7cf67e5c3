//! Movie identity: normalized keys and stable short ids
//!
//! Two canonical records with the same identity key describe the same movie
//! and become merge candidates. Identity is exact, not fuzzy: the key is
//! the lowercased, trimmed, single-spaced title plus the release year, with
//! an explicit marker when the year is absent so undated records never
//! collide with dated ones.

use reel_domain::CanonicalRecord;
use unicode_normalization::UnicodeNormalization;
use uuid::Uuid;

/// Slot used in place of the year for undated records
const NO_YEAR: &str = "unknown";

/// Hex characters of the UUIDv5 kept as the movie id
const MOVIE_ID_LEN: usize = 8;

/// Normalize a title for identity comparison.
///
/// Unicode NFC, lowercase, trimmed, internal whitespace collapsed to
/// single spaces. Case and spacing never distinguish two movies; spelling
/// does.
pub fn normalize_title(title: &str) -> String {
    let composed: String = title.nfc().collect();
    composed
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Identity key for a canonical record. Total: a missing year is a valid
/// key slot, not an error.
pub fn identity_key(record: &CanonicalRecord) -> String {
    key_for(&record.movie_title, record.release_year)
}

/// Identity key from the underlying `(title, year)` pair
pub fn key_for(title: &str, year: Option<i32>) -> String {
    match year {
        Some(year) => format!("{}|{}", normalize_title(title), year),
        None => format!("{}|{}", normalize_title(title), NO_YEAR),
    }
}

/// Stable short id for a movie: the first 8 hex characters of the UUIDv5
/// of its identity key. Reproducible across runs given the same inputs;
/// distinct movies collide only by hash collision, negligible at catalog
/// scale.
pub fn movie_id(title: &str, year: Option<i32>) -> String {
    let key = key_for(title, year);
    let uuid = Uuid::new_v5(&Uuid::NAMESPACE_DNS, key.as_bytes());
    let mut id = uuid.simple().to_string();
    id.truncate(MOVIE_ID_LEN);
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("  Inception "), "inception");
        assert_eq!(normalize_title("THE  DARK   KNIGHT"), "the dark knight");
        assert_eq!(normalize_title("Amélie"), "amélie");
    }

    #[test]
    fn test_case_and_spacing_share_a_key() {
        assert_eq!(
            key_for("Inception", Some(2010)),
            key_for("  inception ", Some(2010))
        );
    }

    #[test]
    fn test_missing_year_never_matches_present_year() {
        assert_ne!(key_for("Inception", Some(2010)), key_for("Inception", None));
        assert_eq!(key_for("Inception", None), "inception|unknown");
    }

    #[test]
    fn test_different_years_are_different_movies() {
        assert_ne!(key_for("Dune", Some(1984)), key_for("Dune", Some(2021)));
    }

    #[test]
    fn test_movie_id_is_stable_and_short() {
        let id = movie_id("Inception", Some(2010));
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(id, movie_id("  INCEPTION ", Some(2010)));
    }

    #[test]
    fn test_movie_id_distinguishes_movies() {
        assert_ne!(movie_id("Dune", Some(1984)), movie_id("Dune", Some(2021)));
        assert_ne!(movie_id("Dune", Some(2021)), movie_id("Dune", None));
    }
}
