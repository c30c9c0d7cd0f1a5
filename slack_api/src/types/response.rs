use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Message;

/// The decoded JSON object returned by any API method, left as-is.
pub type ApiResponse = Map<String, Value>;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
    #[serde(default)]
    pub next_cursor: String,
}

/// Result of a `channels.history` call.
///
/// `messages` keeps the order the API returned them in. The full decoded
/// body is kept in `response` for fields this type does not model.
#[derive(Debug, Clone)]
pub struct History {
    pub messages: Vec<Message>,
    pub has_more: bool,
    pub pin_count: i64,
    pub response_metadata: Option<ResponseMetadata>,
    pub response: ApiResponse,
}

#[derive(Deserialize)]
struct HistoryBody {
    messages: Vec<Message>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    pin_count: i64,
    #[serde(default)]
    response_metadata: Option<ResponseMetadata>,
}

impl History {
    /// Builds a `History` from a successful response. Fails if `messages`
    /// is missing or a message has no `ts`.
    pub fn from_response(response: ApiResponse) -> Result<Self, serde_json::Error> {
        let body: HistoryBody = serde_json::from_value(Value::Object(response.clone()))?;
        Ok(Self {
            messages: body.messages,
            has_more: body.has_more,
            pin_count: body.pin_count,
            response_metadata: body.response_metadata,
            response,
        })
    }

    /// Cursor for the next page, if the API reported one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.response_metadata
            .as_ref()
            .map(|m| m.next_cursor.as_str())
            .filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> ApiResponse {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn from_response_keeps_extra_fields() {
        let response = object(json!({
            "ok": true,
            "messages": [
                {"type": "message", "user": "U1", "text": "hi", "ts": "1.000001"}
            ],
            "latest": "1.000001"
        }));
        let history = History::from_response(response).unwrap();
        assert_eq!(history.messages.len(), 1);
        assert!(!history.has_more);
        assert_eq!(history.response["latest"], "1.000001");
        assert_eq!(history.next_cursor(), None);
    }

    #[test]
    fn odd_message_does_not_fail_the_page() {
        let response = object(json!({
            "ok": true,
            "messages": [
                {"type": "message", "user": "U1", "text": "hi", "ts": "1.000001"},
                {"user": "U2", "text": null, "ts": "1.000002"}
            ]
        }));
        let history = History::from_response(response).unwrap();
        assert_eq!(history.messages.len(), 2);
        assert_eq!(history.messages[1].text, "");
        assert_eq!(history.messages[1].ts, "1.000002");
    }

    #[test]
    fn from_response_requires_messages() {
        let response = object(json!({"ok": true}));
        assert!(History::from_response(response).is_err());
    }

    #[test]
    fn empty_cursor_is_none() {
        let response = object(json!({
            "ok": true,
            "messages": [],
            "response_metadata": {"next_cursor": ""}
        }));
        let history = History::from_response(response).unwrap();
        assert!(history.messages.is_empty());
        assert_eq!(history.next_cursor(), None);
    }

    #[test]
    fn bot_message_without_user() {
        let response = object(json!({
            "ok": true,
            "messages": [{"type": "message", "subtype": "bot_message", "text": "beep", "ts": "2.0"}]
        }));
        let history = History::from_response(response).unwrap();
        assert_eq!(history.messages[0].user, None);
        assert_eq!(history.messages[0].kind, "message");
    }
}
