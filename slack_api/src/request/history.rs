//! Request builder for `channels.history`.

use super::common::{Method, Params, Request, RequestCommon};

/// Number of messages requested when the caller does not say otherwise.
pub const DEFAULT_HISTORY_COUNT: u32 = 1000;

/// `channels.history`: fetches up to `count` messages from a channel.
#[derive(Debug, Clone)]
pub struct HistoryQuery {
    pub common: RequestCommon,
    pub count: u32,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            common: RequestCommon::default(),
            count: DEFAULT_HISTORY_COUNT,
        }
    }
}

impl HistoryQuery {
    /// Sets the maximum number of messages to return.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }
}

impl Request for HistoryQuery {
    const METHOD: Method = Method::Get;
    const ENDPOINT: &'static str = "channels.history";

    fn add_params(&self, params: &mut Params) {
        params.push(("count", self.count.to_string()));
    }

    fn common(&self) -> &RequestCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut RequestCommon {
        &mut self.common
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::encode_params;

    #[test]
    fn default_count() {
        let params = HistoryQuery::default().params(Some("T"), Some("C1"));
        insta::assert_snapshot!(encode_params(&params), @"token=T&channel=C1&count=1000");
    }

    #[test]
    fn custom_count_and_channel() {
        let params = HistoryQuery::default()
            .with_count(50)
            .with_channel("C9")
            .params(Some("T"), Some("C1"));
        insta::assert_snapshot!(encode_params(&params), @"token=T&channel=C9&count=50");
    }

    #[test]
    fn is_a_get() {
        assert_eq!(HistoryQuery::METHOD, Method::Get);
        assert_eq!(HistoryQuery::ENDPOINT, "channels.history");
    }
}
