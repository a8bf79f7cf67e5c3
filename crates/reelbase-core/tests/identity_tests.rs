//! Identity resolution integration tests

mod common;

use common::record;
use proptest::prelude::*;
use reelbase_core::identity::{key_for, movie_id, normalize_title};
use reelbase_core::identity_key;

#[test]
fn test_equal_normalized_pairs_share_a_group_key() {
    let a = record("The  Dark Knight", Some(2008), "provider1");
    let b = record("the dark knight ", Some(2008), "provider2");
    assert_eq!(identity_key(&a), identity_key(&b));
}

#[test]
fn test_differing_pairs_get_distinct_keys() {
    let a = record("The Dark Knight", Some(2008), "provider1");
    let b = record("The Dark Knight Rises", Some(2012), "provider1");
    let c = record("The Dark Knight", None, "provider2");

    assert_ne!(identity_key(&a), identity_key(&b));
    assert_ne!(identity_key(&a), identity_key(&c));
}

proptest! {
    #[test]
    fn test_normalize_title_is_idempotent(title in "[a-zA-Z0-9àéïöü,.:'!? ]{0,40}") {
        let once = normalize_title(&title);
        prop_assert_eq!(normalize_title(&once), once.clone());
    }

    #[test]
    fn test_key_never_depends_on_case_or_padding(title in "[a-zA-Z0-9 ]{1,30}", year in 1900..2100i32) {
        let padded = format!("  {}  ", title.to_uppercase());
        prop_assert_eq!(key_for(&title, Some(year)), key_for(&padded, Some(year)));
    }

    #[test]
    fn test_movie_id_is_eight_hex_chars(title in "\\PC{0,40}", year in proptest::option::of(1000..9999i32)) {
        let id = movie_id(&title, year);
        prop_assert_eq!(id.len(), 8);
        prop_assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_dated_and_undated_never_collide(title in "[a-zA-Z ]{1,30}", year in 1900..2100i32) {
        prop_assert_ne!(key_for(&title, Some(year)), key_for(&title, None));
    }
}
