use tracing::{debug, instrument};

use crate::cricapi;
use crate::error::{CricketError, Result};
use crate::model::{MatchList, MatchesResponse};

const SUCCESS_STATUS: &str = "success";

#[instrument(skip(client, api_key))]
pub(crate) async fn get_current_matches(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    offset: u32,
) -> Result<MatchList> {
    let url = format!("{base_url}/currentMatches");
    let query = [
        ("apikey", api_key.to_string()),
        ("offset", offset.to_string()),
    ];
    let response: MatchesResponse = cricapi::get_json(client, &url, &query).await?;
    let matches = into_matches(response)?;
    debug!(count = matches.len(), offset, "fetched current matches");
    Ok(matches)
}

/// Unwrap the envelope, rejecting failed or data-less responses.
pub(crate) fn into_matches(response: MatchesResponse) -> Result<MatchList> {
    if let Some(info) = &response.info {
        debug!(
            hits_today = ?info.hits_today,
            hits_limit = ?info.hits_limit,
            total_rows = ?info.total_rows,
            "api quota"
        );
    }
    match (response.status.as_deref(), response.data) {
        (Some(SUCCESS_STATUS) | None, Some(data)) => Ok(data),
        (Some(status), _) if status != SUCCESS_STATUS => Err(CricketError::InvalidResponse {
            reason: format!("status {status:?}"),
        }),
        _ => Err(CricketError::InvalidResponse {
            reason: "missing data".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://api.cricapi.com/v1/currentMatches";

    #[test]
    fn test_decode_success_envelope() {
        let body = r#"{
            "apikey": "redacted",
            "data": [
                {
                    "id": "0b12f428-98ab-4009-831d-493d325bc555",
                    "name": "Sri Lanka vs Afghanistan, 1st T20I",
                    "matchType": "t20",
                    "status": "Match starts at Feb 17, 13:30 GMT",
                    "venue": "Rangiri Dambulla International Stadium, Dambulla",
                    "date": "2024-02-17",
                    "dateTimeGMT": "2024-02-17T13:30:00",
                    "teams": ["Sri Lanka", "Afghanistan"],
                    "teamInfo": [
                        {"name": "Afghanistan", "shortname": "AFG", "img": "https://h.cricapi.com/img/icon512.png"},
                        {"name": "Sri Lanka", "shortname": "SL", "img": "https://h.cricapi.com/img/icon512.png"}
                    ],
                    "score": [],
                    "series_id": "b7e3b5c4-0b2d-4bd4-9e8f-b4c8c5c0c7c0",
                    "fantasyEnabled": false,
                    "bbbEnabled": false,
                    "hasSquad": true,
                    "matchStarted": false,
                    "matchEnded": false
                },
                {"id": "m2", "status": "India won by 5 wickets"}
            ],
            "status": "success",
            "info": {"hitsToday": 12, "hitsUsed": 1, "hitsLimit": 100, "credits": 0, "server": 5, "offsetRows": 0, "totalRows": 2, "queryTime": 11.2, "s": 0, "cache": 0}
        }"#;
        let response: MatchesResponse = cricapi::decode(URL, body).unwrap();
        let matches = into_matches(response).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].match_started, Some(false));
        assert_eq!(matches[0].teams[1], "Afghanistan");
        assert_eq!(matches[1].id, "m2");
    }

    #[test]
    fn test_malformed_record_does_not_drop_its_neighbours() {
        let body = r#"{
            "status": "success",
            "data": [
                {"id": "ok"},
                {"id": "m1", "score": [{"r": 120.0, "w": 3, "o": 15}], "teams": ["India", null]},
                {"name": "no id at all"},
                {"id": "last"}
            ]
        }"#;
        let response: MatchesResponse = cricapi::decode(URL, body).unwrap();
        let matches = into_matches(response).unwrap();
        let ids: Vec<_> = matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["ok", "m1", "last"]);
        assert_eq!(matches[1].innings(0).and_then(|s| s.r), Some(120));
        assert_eq!(matches[1].teams, vec!["India".to_string(), String::new()]);
    }

    #[test]
    fn test_failure_status_is_invalid_response() {
        let body = r#"{"status": "failure", "reason": "Invalid API Key"}"#;
        let response: MatchesResponse = cricapi::decode(URL, body).unwrap();
        let err = into_matches(response).unwrap_err();
        assert!(matches!(err, CricketError::InvalidResponse { .. }));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_missing_data_is_invalid_response() {
        let response: MatchesResponse = cricapi::decode(URL, r#"{"status":"success"}"#).unwrap();
        assert!(matches!(
            into_matches(response),
            Err(CricketError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn test_garbage_body_is_decode_error() {
        let err = cricapi::decode::<MatchesResponse>(URL, "<html>502</html>").unwrap_err();
        assert!(matches!(err, CricketError::Decode { .. }));
    }
}
