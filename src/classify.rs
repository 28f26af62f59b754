//! Started/completed classification for a single match.
//!
//! Every function here is total: a missing match or missing fields resolve to
//! a default branch, never to an error. Functions that accept a match take
//! `impl Into<Option<&MatchRecord>>` so callers can pass either `&record` or
//! `None`.

use chrono::{DateTime, Local, Utc};

use crate::model::{MatchRecord, StatusCategory};

/// Lowercase markers whose presence in `status` means the match is over.
///
/// This is a substring heuristic over free text, so a status mentioning e.g.
/// "Tied Knot XI" will also match.
pub const COMPLETION_MARKERS: [&str; 5] = ["won", "victory", "drawn", "tied", "abandoned"];

/// Literal marker in a match name that flags an international fixture.
pub const INTERNATIONAL_MARKER: &str = "International";

pub const NOT_STARTED_TEXT: &str = "Match not started yet";
pub const IN_PROGRESS_TEXT: &str = "Match in progress";
pub const UNKNOWN_STATUS_TEXT: &str = "Unknown status";

/// A start rule either decides (`Some`) or defers to the next rule (`None`).
type StartRule = fn(&MatchRecord, DateTime<Utc>) -> Option<bool>;

/// Evaluated in order; the first rule that decides wins.
const START_RULES: [StartRule; 3] = [explicitly_not_started, score_on_board, start_time_passed];

fn explicitly_not_started(record: &MatchRecord, _now: DateTime<Utc>) -> Option<bool> {
    (record.match_started == Some(false)).then_some(false)
}

fn score_on_board(record: &MatchRecord, _now: DateTime<Utc>) -> Option<bool> {
    record
        .score
        .iter()
        .take(2)
        .any(|innings| innings.is_underway())
        .then_some(true)
}

fn start_time_passed(record: &MatchRecord, now: DateTime<Utc>) -> Option<bool> {
    record
        .start_time()
        .is_some_and(|start| start < now)
        .then_some(true)
}

/// Whether the match has started as of `now`.
pub fn has_started<'a>(record: impl Into<Option<&'a MatchRecord>>, now: DateTime<Utc>) -> bool {
    let Some(record) = record.into() else {
        return false;
    };
    START_RULES
        .iter()
        .find_map(|rule| rule(record, now))
        .unwrap_or(false)
}

/// Whether the upstream status text says the match is finished.
pub fn is_completed<'a>(record: impl Into<Option<&'a MatchRecord>>) -> bool {
    let Some(record) = record.into() else {
        return false;
    };
    let status = record.status.as_deref().unwrap_or_default().to_lowercase();
    COMPLETION_MARKERS
        .iter()
        .any(|marker| status.contains(marker))
}

/// Whether the match belongs to an international tournament.
pub fn is_international(record: &MatchRecord) -> bool {
    record
        .name
        .as_deref()
        .is_some_and(|name| name.contains(INTERNATIONAL_MARKER))
}

/// Started and not yet completed.
pub fn is_live(record: &MatchRecord, now: DateTime<Utc>) -> bool {
    has_started(record, now) && !is_completed(record)
}

/// Human-readable status line.
///
/// Upstream status wins when present. Otherwise a not-yet-started match shows
/// its local start date and time, and a started one shows a generic
/// in-progress text.
pub fn status_text<'a>(record: impl Into<Option<&'a MatchRecord>>, now: DateTime<Utc>) -> String {
    let Some(record) = record.into() else {
        return UNKNOWN_STATUS_TEXT.to_string();
    };
    if let Some(status) = record.status.as_deref().filter(|s| !s.is_empty()) {
        return status.to_string();
    }
    if has_started(record, now) {
        return IN_PROGRESS_TEXT.to_string();
    }
    match record.start_time() {
        Some(start) => format_start(start),
        None => NOT_STARTED_TEXT.to_string(),
    }
}

fn format_start(start: DateTime<Utc>) -> String {
    let local = start.with_timezone(&Local);
    format!("Starts: {} at {}", local.format("%x"), local.format("%H:%M"))
}

/// Display category used to pick the status color.
pub fn status_category<'a>(
    record: impl Into<Option<&'a MatchRecord>>,
    now: DateTime<Utc>,
) -> StatusCategory {
    let Some(record) = record.into() else {
        return StatusCategory::Unknown;
    };
    if !has_started(record, now) {
        StatusCategory::Upcoming
    } else if is_completed(record) {
        StatusCategory::Completed
    } else {
        StatusCategory::Live
    }
}
