//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response (network error, timeout, client build failure).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not the JSON object we expected.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The API answered `ok: false`. `code` is the verbatim `error` field.
    #[error("Slack API error: {code}")]
    Api { code: String },
    /// The configured base URL could not be joined with an endpoint path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// A required environment variable was not set.
    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),
}

impl Error {
    /// The remote error code, if this is an [`Error::Api`].
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Error::Api { code } => Some(code),
            _ => None,
        }
    }

    /// True for failures below the API envelope: the network, the HTTP
    /// status, or an undecodable body.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Transport(_) | Error::HttpStatus { .. } | Error::Decode(_)
        )
    }
}
