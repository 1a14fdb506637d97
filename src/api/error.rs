use reqwest::StatusCode;

/// Failure talking to the backend.
///
/// Callers only distinguish success from failure; the variants exist for
/// logging.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to reach {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),
}
