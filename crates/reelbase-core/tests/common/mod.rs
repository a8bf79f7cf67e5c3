//! Shared builders for integration tests

use reel_domain::CanonicalRecord;

/// Canonical record with just the identity fields set
#[allow(dead_code)]
pub fn record(title: &str, year: Option<i32>, provider: &str) -> CanonicalRecord {
    let mut record = CanonicalRecord::new(title.to_string(), provider.to_string());
    record.release_year = year;
    record
}
