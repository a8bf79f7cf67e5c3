//! Deterministic cross-provider merging
//!
//! Records sharing an identity key are folded into one merged record.
//! Precedence is positional: the caller supplies records in source
//! discovery order (lexicographic filename order, then row order within a
//! file) and every rule is "first non-missing wins", applied independently
//! per leaf field. Conflicts are never errors. Providers are recorded in
//! first-seen order whether or not they won any field.

use crate::identity;
use reel_domain::{CanonicalRecord, Financials, MergedRecord, Ratings};
use std::collections::HashMap;

/// Group canonical records by identity key.
///
/// Preserves input order both across groups (first appearance) and within
/// each group; never re-sorts by any other criterion. Every group holds at
/// least one record.
pub fn group_by_identity(records: Vec<CanonicalRecord>) -> Vec<(String, Vec<CanonicalRecord>)> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<CanonicalRecord>> = HashMap::new();

    for record in records {
        let key = identity::identity_key(&record);
        if !groups.contains_key(&key) {
            order.push(key.clone());
        }
        groups.entry(key).or_default().push(record);
    }

    order
        .into_iter()
        .filter_map(|key| groups.remove(&key).map(|group| (key, group)))
        .collect()
}

/// Merge one identity group into a unified record.
///
/// Returns `None` only for an empty slice, which grouping never produces.
pub fn merge_group(records: &[CanonicalRecord]) -> Option<MergedRecord> {
    let first = records.first()?;

    let movie_title = first.movie_title.clone();
    let release_year = records.iter().find_map(|record| record.release_year);

    let mut ratings = Ratings::default();
    let mut financials = Financials::default();
    let mut providers: Vec<String> = Vec::new();

    for record in records {
        if !providers.iter().any(|p| p == &record.provider) {
            providers.push(record.provider.clone());
        }

        fill_missing(&mut ratings.critic.score, record.ratings.critic.score);
        fill_missing(&mut ratings.critic.top_score, record.ratings.critic.top_score);
        fill_missing(
            &mut ratings.critic.total_ratings,
            record.ratings.critic.total_ratings,
        );
        fill_missing(&mut ratings.audience.score, record.ratings.audience.score);
        fill_missing(
            &mut ratings.audience.total_ratings,
            record.ratings.audience.total_ratings,
        );

        fill_missing(
            &mut financials.domestic_box_office_usd,
            record.financials.domestic_box_office_usd,
        );
        fill_missing(
            &mut financials.worldwide_box_office_usd,
            record.financials.worldwide_box_office_usd,
        );
        fill_missing(
            &mut financials.production_budget_usd,
            record.financials.production_budget_usd,
        );
        fill_missing(
            &mut financials.marketing_spend_usd,
            record.financials.marketing_spend_usd,
        );
    }

    Some(MergedRecord {
        movie_id: identity::movie_id(&movie_title, release_year),
        movie_title,
        release_year,
        ratings,
        financials,
        providers,
    })
}

/// First non-missing value wins; later values never overwrite
fn fill_missing<T: Copy>(slot: &mut Option<T>, value: Option<T>) {
    if slot.is_none() {
        *slot = value;
    }
}

/// Merge every identity group and order the result by ascending
/// case-insensitive title, ties broken by movie id. The ordering makes the
/// final artifact deterministic and diff-friendly.
pub fn merge_all(records: Vec<CanonicalRecord>) -> Vec<MergedRecord> {
    let groups = group_by_identity(records);
    for (key, group) in &groups {
        tracing::debug!("Identity group {} has {} record(s)", key, group.len());
    }

    let mut merged: Vec<MergedRecord> = groups
        .into_iter()
        .filter_map(|(_, group)| merge_group(&group))
        .collect();

    merged.sort_by(|a, b| {
        a.movie_title
            .to_lowercase()
            .cmp(&b.movie_title.to_lowercase())
            .then_with(|| a.movie_id.cmp(&b.movie_id))
    });
    merged
}
