use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient::{lenient, lenient_count, lenient_number, lenient_records, lenient_seq};

/// Formats the upstream uses for `dateTimeGMT` when it omits the offset.
const NAIVE_GMT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];
const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// A list of matches as returned by one refresh.
pub type MatchList = Vec<MatchRecord>;

/// One cricket fixture as reported by the upstream API.
///
/// Only `id` is required. Every other field may be missing and is treated as
/// unknown. The `teams`, `team_info` and `score` vectors are positional:
/// index 0 is always team A.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub series_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub match_started: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub match_ended: Option<bool>,
    #[serde(default, rename = "dateTimeGMT", deserialize_with = "lenient")]
    pub date_time_gmt: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub teams: Vec<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub team_info: Vec<TeamInfo>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub score: Vec<InningsScore>,
    #[serde(default, deserialize_with = "lenient")]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub match_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub toss_winner: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub toss_choice: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub win_probability: Option<WinProbability>,
}

/// Runs, wickets and overs for one team's batting turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InningsScore {
    #[serde(default, deserialize_with = "lenient_count")]
    pub r: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub w: Option<u32>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub o: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub inning: Option<String>,
}

/// Richer team descriptor shown alongside the plain team name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub shortname: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub img: Option<String>,
}

/// Win percentages for team A and team B.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WinProbability {
    #[serde(default, deserialize_with = "lenient_number")]
    pub team1: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub team2: Option<f64>,
}

/// The top-level body of a `currentMatches` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchesResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub data: Option<MatchList>,
    #[serde(default, deserialize_with = "lenient")]
    pub info: Option<ResponseInfo>,
}

/// Quota and paging metadata attached to every response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub hits_today: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub hits_limit: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_rows: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub offset: Option<u32>,
}

impl MatchRecord {
    /// Scheduled (or actual) start, if `dateTimeGMT` is present and parsable.
    ///
    /// Values without an offset are read as UTC, and a bare date as midnight UTC.
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        let raw = self.date_time_gmt.as_deref()?.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NAIVE_GMT_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(raw, DATE_ONLY_FORMAT)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .map(|naive| naive.and_utc())
    }

    /// Innings record for team A (`0`) or team B (`1`).
    pub fn innings(&self, index: usize) -> Option<&InningsScore> {
        self.score.get(index)
    }
}

impl InningsScore {
    /// True once any of runs, wickets or overs is positive. Missing values count as zero.
    pub fn is_underway(&self) -> bool {
        self.r.unwrap_or(0) > 0 || self.w.unwrap_or(0) > 0 || self.o.unwrap_or(0.0) > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_start_time_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        for raw in [
            "2024-01-01T10:00:00Z",
            "2024-01-01T10:00:00",
            "2024-01-01T15:30:00+05:30",
            "2024-01-01 10:00:00",
        ] {
            let record = MatchRecord {
                date_time_gmt: Some(raw.to_string()),
                ..Default::default()
            };
            assert_eq!(record.start_time(), Some(expected), "format {raw}");
        }
    }

    #[test]
    fn test_start_time_date_only_is_midnight_utc() {
        let record = MatchRecord {
            date_time_gmt: Some("2024-02-17".to_string()),
            ..Default::default()
        };
        assert_eq!(
            record.start_time(),
            Some(Utc.with_ymd_and_hms(2024, 2, 17, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_deserialize_malformed_fields_as_unknown() {
        let raw = r#"{
            "id": "m1",
            "name": 42,
            "matchStarted": "yes",
            "teams": ["India", null],
            "teamInfo": [null, {"name": "Nepal", "shortname": 5}],
            "score": [{"r": 120.0, "w": -1, "o": "15.3"}, "n/a"],
            "winProbability": {"team1": "61", "team2": null}
        }"#;
        let record: MatchRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.name, None);
        assert_eq!(record.match_started, None);
        assert_eq!(record.teams, vec!["India".to_string(), String::new()]);
        assert_eq!(record.team_info[0], TeamInfo::default());
        assert_eq!(record.team_info[1].name.as_deref(), Some("Nepal"));
        assert_eq!(record.team_info[1].shortname, None);
        let first = record.innings(0).unwrap();
        assert_eq!((first.r, first.w, first.o), (Some(120), None, Some(15.3)));
        assert_eq!(record.innings(1), Some(&InningsScore::default()));
        assert_eq!(
            record.win_probability,
            Some(WinProbability {
                team1: Some(61.0),
                team2: None
            })
        );
    }

    #[test]
    fn test_start_time_unparsable() {
        let record = MatchRecord {
            date_time_gmt: Some("tomorrow-ish".to_string()),
            ..Default::default()
        };
        assert_eq!(record.start_time(), None);
        assert_eq!(MatchRecord::default().start_time(), None);
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let record: MatchRecord =
            serde_json::from_str(r#"{"id":"m3","score":null,"teams":null}"#).unwrap();
        assert_eq!(record.id, "m3");
        assert!(record.score.is_empty());
        assert!(record.teams.is_empty());
        assert_eq!(record.match_started, None);
    }

    #[test]
    fn test_deserialize_full_record() {
        let raw = r#"{
            "id": "a1",
            "name": "India vs Australia, 1st ODI",
            "matchType": "odi",
            "status": "India won by 5 wickets",
            "venue": "Wankhede Stadium, Mumbai",
            "dateTimeGMT": "2024-03-10T08:30:00",
            "teams": ["India", "Australia"],
            "teamInfo": [
                {"name": "India", "shortname": "IND", "img": "https://example.invalid/ind.png"},
                {"name": "Australia", "shortname": "AUS"}
            ],
            "score": [
                {"r": 250, "w": 8, "o": 50, "inning": "Australia Inning 1"},
                {"r": 251, "w": 5, "o": 47.3, "inning": "India Inning 1"}
            ],
            "matchStarted": true,
            "matchEnded": true
        }"#;
        let record: MatchRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.match_type.as_deref(), Some("odi"));
        assert_eq!(record.team_info[1].shortname.as_deref(), Some("AUS"));
        assert_eq!(record.innings(1).and_then(|s| s.o), Some(47.3));
        assert!(record.innings(0).is_some_and(InningsScore::is_underway));
        assert!(record.innings(2).is_none());
    }

    #[test]
    fn test_innings_underway() {
        assert!(!InningsScore::default().is_underway());
        let overs_only = InningsScore {
            o: Some(0.1),
            ..Default::default()
        };
        assert!(overs_only.is_underway());
    }
}
