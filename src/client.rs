use tracing::instrument;

use crate::cricapi;
use crate::error::{CricketError, Result};
use crate::model::MatchList;

/// Environment variable read by [`CricClient::from_env`].
pub const API_KEY_ENV: &str = "CRICAPI_KEY";

/// The main entry point for fetching matches from cricapi.com.
///
/// `CricClient` wraps a [`reqwest::Client`] together with the API key and
/// endpoint. It performs single requests only; polling lives in
/// [`LiveFeed`](crate::LiveFeed).
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> cricket_scores::Result<()> {
/// use cricket_scores::{sort_matches, CricClient};
///
/// let client = CricClient::from_env()?;
/// let matches = client.get_current_matches(0).await?;
/// let ordered = sort_matches(&matches, chrono::Utc::now());
/// println!("Found {} matches", ordered.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CricClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl CricClient {
    /// Create a new client with default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_key)
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            http: client,
            api_key: api_key.into(),
            base_url: cricapi::BASE_URL.to_string(),
        }
    }

    /// Create a new client with the key taken from `CRICAPI_KEY`.
    pub fn from_env() -> Result<Self> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(Self::new)
            .ok_or(CricketError::MissingApiKey { var: API_KEY_ENV })
    }

    /// Point the client at a different API root (for mirrors or a local stub).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the page of current matches starting at `offset`.
    #[instrument(skip(self))]
    pub async fn get_current_matches(&self, offset: u32) -> Result<MatchList> {
        cricapi::current_matches::get_current_matches(
            &self.http,
            &self.base_url,
            &self.api_key,
            offset,
        )
        .await
    }
}

impl std::fmt::Debug for CricClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CricClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_override_trims_slash() {
        let client = CricClient::new("key").with_base_url("http://127.0.0.1:9/v1/");
        assert_eq!(client.base_url(), "http://127.0.0.1:9/v1");
        assert_eq!(CricClient::new("key").base_url(), "https://api.cricapi.com/v1");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = CricClient::new("super-secret");
        assert!(!format!("{client:?}").contains("super-secret"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_retryable_http_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let client = CricClient::new("key").with_base_url("http://127.0.0.1:9/v1");
        let err = client.get_current_matches(0).await.unwrap_err();
        assert!(matches!(err, CricketError::Http { .. }), "{err}");
        assert!(err.is_retryable());
        assert!(!err.to_string().contains("apikey=key"));
    }
}
