/// Errors that can occur talking to the remote catalog.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
