use std::path::PathBuf;

/// All errors that can occur while fetching matches or persisting favorites.
///
/// Classification, sorting and share formatting are total and never produce
/// one of these.
#[derive(thiserror::Error, Debug)]
pub enum CricketError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// The endpoint URL could not be built.
    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body was not the JSON shape we expect.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// The envelope decoded but reported failure or carried no match data.
    #[error("invalid data received from API: {reason}")]
    InvalidResponse { reason: String },

    /// No API key was configured.
    #[error("missing API key (set {var})")]
    MissingApiKey { var: &'static str },

    /// Reading or writing the favorites file failed.
    #[error("favorites storage at {path} failed: {source}")]
    FavoritesIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The favorites file exists but does not hold a JSON array of ids.
    #[error("favorites file {path} is malformed: {source}")]
    FavoritesFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl CricketError {
    /// Whether the failure came from the network side and a later retry may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CricketError::Http { .. }
                | CricketError::UnexpectedStatus { .. }
                | CricketError::ResponseBody { .. }
                | CricketError::Decode { .. }
                | CricketError::InvalidResponse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CricketError>;
