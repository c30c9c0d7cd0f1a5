use serde::{Deserialize, Deserializer, Serialize};

/// A single message as returned by `channels.history`.
///
/// Only `ts` is required. Slack omits or nulls the other fields for some
/// subtypes (file shares, tombstones), and those messages still decode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Usually `"message"`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    /// Might not exist for bots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// Timestamp, e.g. `"1512085950.000216"`. Also the message's id within its channel.
    pub ts: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_text_and_missing_type_decode() {
        let msg: Message = serde_json::from_str(r#"{"text": null, "ts": "1.000002"}"#).unwrap();
        assert_eq!(msg.kind, "");
        assert_eq!(msg.text, "");
        assert_eq!(msg.ts, "1.000002");
    }

    #[test]
    fn missing_ts_is_rejected() {
        assert!(serde_json::from_str::<Message>(r#"{"type": "message", "text": "x"}"#).is_err());
    }
}
