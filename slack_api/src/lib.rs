//! Minimal async client for three Slack Web API methods: `chat.postMessage`,
//! `chat.delete` and `channels.history`.
//!
//! Every call resolves its channel from the per-call argument or the
//! configured default, performs one HTTP round trip, and maps `ok: false`
//! responses to [`Error::Api`].

mod client;
mod config;
mod errors;
pub mod request;
pub mod types;
pub use self::client::Client;
pub use self::config::{ClientConfig, CHANNEL_ENV, TOKEN_ENV};
pub use self::errors::Error;
pub use self::request::{DeleteMessage, HistoryQuery, PostMessage, Request};
