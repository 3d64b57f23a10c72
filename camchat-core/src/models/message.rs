use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::media::{media_items, MediaItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

/// One entry of a conversation. Never mutated once it is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    /// Auxiliary payload returned alongside a bot reply, shape unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_data: Option<Value>,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub fn new(id: u64, text: impl Into<String>, sender: Sender, tool_data: Option<Value>) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            tool_data,
            sent_at: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }

    /// Media candidates mined from `tool_data`, classified on every call.
    pub fn media(&self) -> Vec<MediaItem> {
        self.tool_data.as_ref().map(media_items).unwrap_or_default()
    }
}

/// Body of `POST /chat/ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub thread_id: String,
    pub message: String,
}

/// Reply of `POST /chat/ask`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default, deserialize_with = "null_as_none")]
    pub tool_data: Option<Value>,
}

fn null_as_none<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(other),
    })
}

/// Error body the assistant sends with a non-2xx status, when it sends one.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;
    use serde_json::json;

    #[test]
    fn test_sender_display() {
        assert_eq!(Sender::User.to_string(), "user");
        assert_eq!(Sender::Bot.to_string(), "bot");
    }

    #[test]
    fn test_chat_request_body_shape() {
        let request = ChatRequest {
            thread_id: "thread-1".to_string(),
            message: "show me the gate".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"thread_id": "thread-1", "message": "show me the gate"})
        );
    }

    #[test]
    fn test_chat_response_tool_data_optional() {
        let plain: ChatResponse = serde_json::from_value(json!({"response": "hi"})).unwrap();
        assert_eq!(plain.response, "hi");
        assert!(plain.tool_data.is_none());

        let null: ChatResponse =
            serde_json::from_value(json!({"response": "hi", "tool_data": null})).unwrap();
        assert!(null.tool_data.is_none());

        let with_data: ChatResponse =
            serde_json::from_value(json!({"response": "hi", "tool_data": {"url": "a.mp4"}}))
                .unwrap();
        assert_eq!(with_data.tool_data, Some(json!({"url": "a.mp4"})));
    }

    #[test]
    fn test_message_media_without_tool_data() {
        let message = Message::new(1, "hello", Sender::User, None);
        assert!(message.is_user());
        assert!(message.media().is_empty());
    }

    #[test]
    fn test_message_media_classifies_candidates() {
        let message = Message::new(
            2,
            "here you go",
            Sender::Bot,
            Some(json!({"urls": ["a.mp4", "b"], "camera": "rtsp://10.0.0.2/live"})),
        );
        let media = message.media();
        let kinds: Vec<MediaKind> = media.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![MediaKind::Video, MediaKind::Link, MediaKind::RtspStream]
        );
    }
}
