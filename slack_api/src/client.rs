//! HTTP client for the Slack Web API.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::{
    config::ClientConfig,
    request::{DeleteMessage, HistoryQuery, Method, PostMessage, Request},
    types::{ApiResponse, History},
    Error,
};

/// Request timeout for Slack API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Slack Web API.
///
/// Holds the token and default channel from a [`ClientConfig`]. Every
/// operation is a single round trip: no retries, no pagination. The token
/// is sent as the `token` parameter, not as a header.
pub struct Client {
    client: reqwest::Client,
    /// Base URL for the API. Defaults to `https://slack.com/api`.
    base_api_url: String,
    config: ClientConfig,
}

impl Client {
    /// Creates a new client pointing at the production Slack API.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Self::with_base_url("https://slack.com/api", config)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, config: ClientConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        Ok(Self {
            client,
            base_api_url: base_url.trim_end_matches('/').to_string(),
            config,
        })
    }

    /// Creates a client from `SLACK_API_TOKEN` / `SLACK_CHANNEL_ID`.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::from_env()?)
    }

    /// The channel used when a call does not name one.
    pub fn default_channel(&self) -> Option<&str> {
        self.config.channel_id.as_deref()
    }

    /// Whether a token will be sent with each request.
    pub fn has_token(&self) -> bool {
        self.config.token.is_some()
    }

    fn get_url(&self, endpoint: &str) -> Result<Url, Error> {
        Url::parse(format!("{}/{}", &self.base_api_url, endpoint).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })
    }

    /// Sends `request` and returns the decoded body if the API reported `ok: true`.
    ///
    /// GET parameters go in the query string; POST parameters are sent as a
    /// form-encoded body. Transport errors are stripped of the request URL,
    /// since a GET URL carries the token.
    pub async fn execute<R: Request>(&self, request: &R) -> Result<ApiResponse, Error> {
        let params = request.params(self.config.token.as_deref(), self.default_channel());
        let url = self.get_url(R::ENDPOINT)?;

        tracing::debug!(method = ?R::METHOD, endpoint = R::ENDPOINT, "Sending Slack API request");

        let builder = match R::METHOD {
            Method::Get => self.client.get(url).query(&params),
            Method::Post => self.client.post(url).form(&params),
        };

        let resp = builder.send().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to reach {}: {}", R::ENDPOINT, e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<ApiResponse>(&body).map_err(|e| {
            tracing::error!("Failed to parse response: {} | body: {}", e, truncate_body(&body));
            Error::Decode(e)
        })?;

        check_ok(parsed)
    }

    /// Posts `message` to `channel_id`, or to the default channel when
    /// `channel_id` is `None` or empty.
    pub async fn post_message(
        &self,
        message: &str,
        channel_id: Option<&str>,
    ) -> Result<ApiResponse, Error> {
        let mut request = PostMessage::new(message);
        request.common.channel = channel_id.map(str::to_string);
        self.execute(&request).await
    }

    /// Deletes the message with timestamp `ts` (e.g. `"1405894322.002768"`).
    pub async fn delete_message(
        &self,
        ts: &str,
        channel_id: Option<&str>,
    ) -> Result<ApiResponse, Error> {
        let mut request = DeleteMessage::new(ts);
        request.common.channel = channel_id.map(str::to_string);
        self.execute(&request).await
    }

    /// Fetches up to `limit` messages. See [`HistoryQuery`] for the default of 1000.
    pub async fn get_history(&self, limit: u32, channel_id: Option<&str>) -> Result<History, Error> {
        let mut query = HistoryQuery::default().with_count(limit);
        query.common.channel = channel_id.map(str::to_string);
        self.history(&query).await
    }

    /// Runs a prepared [`HistoryQuery`].
    pub async fn history(&self, query: &HistoryQuery) -> Result<History, Error> {
        let response = self.execute(query).await?;
        History::from_response(response).map_err(|e| {
            tracing::error!("Unexpected channels.history payload: {}", e);
            Error::Decode(e)
        })
    }
}

/// Maps `ok: false` (or a missing `ok`) to [`Error::Api`].
fn check_ok(response: ApiResponse) -> Result<ApiResponse, Error> {
    if response.get("ok").and_then(Value::as_bool) == Some(true) {
        return Ok(response);
    }
    let code = response
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or("unknown_error")
        .to_string();
    tracing::warn!("Slack API returned error: {}", code);
    Err(Error::Api { code })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
