pub(crate) mod current_matches;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{CricketError, Result};

pub(crate) const BASE_URL: &str = "https://api.cricapi.com/v1";

/// Fetch a URL and decode the response body as JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<T> {
    debug!(url, "fetching json");

    let request_url =
        reqwest::Url::parse_with_params(url, query.iter().map(|(k, v)| (*k, v.as_str())))
            .map_err(|e| CricketError::InvalidUrl {
                url: url.to_owned(),
                reason: e.to_string(),
            })?;

    let response = client
        .get(request_url)
        .send()
        .await
        .map_err(|e| CricketError::Http {
            url: url.to_owned(),
            source: e.without_url(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CricketError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| CricketError::ResponseBody {
        url: url.to_owned(),
        source: e.without_url(),
    })?;

    decode(url, &body)
}

pub(crate) fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| CricketError::Decode {
        url: url.to_owned(),
        source: e,
    })
}
