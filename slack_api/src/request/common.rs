//! Shared request infrastructure: the [`Request`] trait, [`RequestCommon`] fields, and channel resolution.

/// Ordered `(name, value)` pairs sent to an API method.
pub type Params = Vec<(&'static str, String)>;

/// How a request's parameters travel: in the query string (`Get`) or as a
/// form-encoded body (`Post`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Fields every request carries.
#[derive(Debug, Clone, Default)]
pub struct RequestCommon {
    /// Per-call channel. Empty or absent means "use the client's default".
    pub channel: Option<String>,
}

/// Trait implemented by all request builders. Describes which API method to
/// call and which parameters it needs besides `token` and `channel`.
pub trait Request {
    /// HTTP method used for this API method.
    const METHOD: Method;

    /// API method name, appended to the base URL (e.g. `chat.postMessage`).
    const ENDPOINT: &'static str;

    /// Appends the method-specific parameters.
    fn add_params(&self, params: &mut Params);

    /// Returns a reference to the common request fields.
    fn common(&self) -> &RequestCommon;

    /// Returns a mutable reference to the common request fields.
    fn common_mut(&mut self) -> &mut RequestCommon;

    /// Targets a specific channel instead of the client's default.
    fn with_channel(mut self, channel: &str) -> Self
    where
        Self: Sized,
    {
        self.common_mut().channel = Some(channel.to_string());
        self
    }

    /// Full parameter list: `token`, then the resolved `channel`, then the
    /// method-specific parameters. Absent values are left out.
    fn params(&self, token: Option<&str>, default_channel: Option<&str>) -> Params {
        let mut params = Params::new();
        if let Some(token) = token {
            params.push(("token", token.to_string()));
        }
        if let Some(channel) = resolve_channel(self.common().channel.as_deref(), default_channel) {
            params.push(("channel", channel.to_string()));
        }
        self.add_params(&mut params);
        params
    }
}

/// Picks the per-call channel when it is non-empty, the default otherwise.
pub fn resolve_channel<'a>(per_call: Option<&'a str>, default: Option<&'a str>) -> Option<&'a str> {
    per_call
        .filter(|c| !c.is_empty())
        .or(default.filter(|c| !c.is_empty()))
}

/// Encodes parameters the way a form body or query string carries them.
#[cfg(test)]
pub(crate) fn encode_params(params: &Params) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
        .finish()
}
