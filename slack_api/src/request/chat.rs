//! Request builders for the `chat.*` methods.

use super::common::{Method, Params, Request, RequestCommon};

/// `chat.postMessage`: posts `text` to a channel.
#[derive(Debug, Clone)]
pub struct PostMessage {
    pub common: RequestCommon,
    pub text: String,
}

impl PostMessage {
    /// Message with `text`, sent to the client's default channel unless
    /// [`Request::with_channel`] says otherwise.
    pub fn new(text: &str) -> Self {
        Self {
            common: RequestCommon::default(),
            text: text.to_string(),
        }
    }
}

impl Request for PostMessage {
    const METHOD: Method = Method::Post;
    const ENDPOINT: &'static str = "chat.postMessage";

    fn add_params(&self, params: &mut Params) {
        params.push(("text", self.text.clone()));
    }

    fn common(&self) -> &RequestCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut RequestCommon {
        &mut self.common
    }
}

/// `chat.delete`: deletes the message identified by `ts`.
#[derive(Debug, Clone)]
pub struct DeleteMessage {
    pub common: RequestCommon,
    /// Kept as a string; `1401383885.000061` does not survive a round trip through `f64`.
    pub ts: String,
}

impl DeleteMessage {
    /// Deletes the message whose timestamp is `ts`.
    pub fn new(ts: &str) -> Self {
        Self {
            common: RequestCommon::default(),
            ts: ts.to_string(),
        }
    }
}

impl Request for DeleteMessage {
    const METHOD: Method = Method::Post;
    const ENDPOINT: &'static str = "chat.delete";

    fn add_params(&self, params: &mut Params) {
        params.push(("ts", self.ts.clone()));
    }

    fn common(&self) -> &RequestCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut RequestCommon {
        &mut self.common
    }
}
