//! Display ordering and favorites filtering over a list of matches.

use chrono::{DateTime, Utc};
use itertools::Itertools;

use crate::classify::{is_international, is_live};
use crate::model::{FavoriteSet, MatchRecord};

/// Ordering key: international first, then live, then earliest start.
/// A missing or unparsable start sorts last.
fn display_key(record: &MatchRecord, now: DateTime<Utc>) -> (bool, bool, DateTime<Utc>) {
    (
        !is_international(record),
        !is_live(record, now),
        record.start_time().unwrap_or(DateTime::<Utc>::MAX_UTC),
    )
}

/// Return a new list in display order. The input is left untouched.
///
/// The sort is stable, so ties keep their input order and sorting an
/// already sorted list is a no-op.
pub fn sort_matches(matches: &[MatchRecord], now: DateTime<Utc>) -> Vec<MatchRecord> {
    matches
        .iter()
        .cloned()
        .sorted_by_cached_key(|record| display_key(record, now))
        .collect()
}

/// Keep the matches whose id is a favorite, in input order.
pub fn filter_by_favorites(matches: &[MatchRecord], favorites: &FavoriteSet) -> Vec<MatchRecord> {
    matches
        .iter()
        .filter(|record| favorites.contains(&record.id))
        .cloned()
        .collect()
}
