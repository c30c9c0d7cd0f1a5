//! Client configuration.

use serde::Deserialize;

use crate::Error;

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "SLACK_API_TOKEN";
/// Environment variable holding the default channel id.
pub const CHANNEL_ENV: &str = "SLACK_CHANNEL_ID";

/// Token and default channel used by [`crate::Client`].
///
/// Deserializes from a mapping with the keys `token` and `channel_id`;
/// both are optional. A missing token is not rejected here: the API
/// answers `not_authed` on the first call instead.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
}

impl ClientConfig {
    /// Config with `token` and no default channel.
    pub fn new(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            channel_id: None,
        }
    }

    /// Sets the channel used when a call does not name one.
    pub fn with_channel_id(mut self, channel_id: &str) -> Self {
        self.channel_id = Some(channel_id.to_string());
        self
    }

    /// Reads `SLACK_API_TOKEN` (required) and `SLACK_CHANNEL_ID` from the
    /// environment, loading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let token = lookup(TOKEN_ENV)
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingConfig(TOKEN_ENV))?;
        let channel_id = lookup(CHANNEL_ENV).filter(|c| !c.is_empty());
        tracing::debug!(has_default_channel = channel_id.is_some(), "Loaded client config from environment");
        Ok(Self {
            token: Some(token),
            channel_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn deserialize_from_json_mapping() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"token": "xoxb-1", "channel_id": "C1", "extra": 1}"#).unwrap();
        assert_eq!(config, ClientConfig::new("xoxb-1").with_channel_id("C1"));
    }

    #[test]
    fn deserialize_empty_mapping() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn from_lookup_reads_both_vars() {
        let config =
            ClientConfig::from_lookup(lookup(&[(TOKEN_ENV, "T"), (CHANNEL_ENV, "C1")])).unwrap();
        assert_eq!(config.token.as_deref(), Some("T"));
        assert_eq!(config.channel_id.as_deref(), Some("C1"));
    }

    #[test]
    fn from_lookup_channel_is_optional() {
        let config = ClientConfig::from_lookup(lookup(&[(TOKEN_ENV, "T"), (CHANNEL_ENV, "")])).unwrap();
        assert_eq!(config.channel_id, None);
    }

    #[test]
    fn from_lookup_requires_token() {
        let err = ClientConfig::from_lookup(lookup(&[(CHANNEL_ENV, "C1")])).unwrap_err();
        assert!(matches!(err, Error::MissingConfig(TOKEN_ENV)));
    }
}
