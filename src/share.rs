//! Plain-text match summary handed to the OS share sheet, plus team flags.

use chrono::{DateTime, Utc};

use crate::classify::{has_started, status_text};
use crate::model::{InningsScore, MatchRecord};

pub const SHARE_TITLE: &str = "Cricket Score Update";
const SHARE_FOOTER: &str = "Check live scores on Cricket Score App!";
const DEFAULT_FLAG: &str = "🏏";

static TEAM_FLAGS: [(&str, &str); 19] = [
    ("India", "🇮🇳"),
    ("New Zealand", "🇳🇿"),
    ("Australia", "🇦🇺"),
    ("England", "🇬🇧"),
    ("South Africa", "🇿🇦"),
    ("West Indies", "🌴"),
    ("Pakistan", "🇵🇰"),
    ("Sri Lanka", "🇱🇰"),
    ("Bangladesh", "🇧🇩"),
    ("Afghanistan", "🇦🇫"),
    ("Zimbabwe", "🇿🇼"),
    ("Ireland", "🇮🇪"),
    ("Scotland", "🏴\u{e0067}\u{e0062}\u{e0073}\u{e0063}\u{e0074}\u{e007f}"),
    ("Netherlands", "🇳🇱"),
    ("United Arab Emirates", "🇦🇪"),
    ("Nepal", "🇳🇵"),
    ("Oman", "🇴🇲"),
    ("Papua New Guinea", "🇵🇬"),
    ("Namibia", "🇳🇦"),
];

/// Flag emoji for a national side, or a generic cricket emoji.
pub fn team_flag(team_name: Option<&str>) -> &'static str {
    team_name
        .and_then(|name| TEAM_FLAGS.iter().find(|(team, _)| *team == name))
        .map_or(DEFAULT_FLAG, |(_, flag)| *flag)
}

/// Short label for team A (`0`) or team B (`1`).
///
/// Prefers the short name, then the plain team name, then "Team N".
pub fn team_label(record: &MatchRecord, index: usize) -> String {
    record
        .team_info
        .get(index)
        .and_then(|info| info.shortname.as_deref())
        .filter(|label| !label.is_empty())
        .or_else(|| record.teams.get(index).map(String::as_str))
        .filter(|label| !label.is_empty())
        .map_or_else(|| format!("Team {}", index + 1), str::to_string)
}

/// `r/w (o)` with missing values shown as zero.
pub fn score_line(innings: Option<&InningsScore>) -> String {
    let runs = innings.and_then(|s| s.r).unwrap_or(0);
    let wickets = innings.and_then(|s| s.w).unwrap_or(0);
    let overs = innings.and_then(|s| s.o).unwrap_or(0.0);
    format!("{runs}/{wickets} ({overs})")
}

/// Multi-line summary: tournament, fixture, scores once started, status.
pub fn share_summary(record: &MatchRecord, now: DateTime<Utc>) -> String {
    let team_a = team_label(record, 0);
    let team_b = team_label(record, 1);
    let name = record
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or("Cricket Match");

    let mut message = format!("{name}\n{team_a} vs {team_b}\n");
    if has_started(record, now) {
        message.push_str(&format!(
            "Score: {team_a} {}\n{team_b} {}\n",
            score_line(record.innings(0)),
            score_line(record.innings(1))
        ));
    }
    message.push_str(&format!("Status: {}\n", status_text(record, now)));
    message.push_str(SHARE_FOOTER);
    message
}
