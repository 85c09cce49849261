//! The server's uniform response wrapper.

use serde::Deserialize;

/// Every endpoint answers `{ statusCode, message, content }`; only the
/// `content` shape varies.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    pub content: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_typical_envelope() {
        let body = r#"{"statusCode":200,"message":"ok","content":[1,2,3]}"#;
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.status_code, Some(200));
        assert_eq!(envelope.message.as_deref(), Some("ok"));
        assert_eq!(envelope.content, vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_message_is_none() {
        let body = r#"{"statusCode":200,"content":{"id":1}}"#;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(body).unwrap();
        assert!(envelope.message.is_none());
        assert_eq!(envelope.content["id"], 1);
    }
}
