use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use super::message::{Message, Sender};

/// Append-only message log bound to one thread id for its whole lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct Conversation {
    thread_id: String,
    messages: Vec<Message>,
    next_id: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self::with_thread_id(new_thread_id())
    }

    pub fn with_thread_id(thread_id: impl Into<String>) -> Self {
        Self {
            thread_id: thread_id.into(),
            messages: Vec::new(),
            next_id: 1,
        }
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn get(&self, id: u64) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> &Message {
        self.push(text.into(), Sender::User, None)
    }

    pub fn push_bot(&mut self, text: impl Into<String>, tool_data: Option<Value>) -> &Message {
        self.push(text.into(), Sender::Bot, tool_data)
    }

    fn push(&mut self, text: String, sender: Sender, tool_data: Option<Value>) -> &Message {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message::new(id, text, sender, tool_data));
        &self.messages[self.messages.len() - 1]
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

pub fn new_thread_id() -> String {
    format!("thread-{}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_thread_id_format() {
        let conversation = Conversation::new();
        assert!(conversation.thread_id().starts_with("thread-"));
        assert_ne!(conversation.thread_id(), Conversation::new().thread_id());
    }

    #[test]
    fn test_append_keeps_insertion_order_and_ids() {
        let mut conversation = Conversation::with_thread_id("thread-fixed");
        conversation.push_user("first");
        conversation.push_bot("second", None);
        conversation.push_user("third");

        let ids: Vec<u64> = conversation.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let texts: Vec<&str> = conversation
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(conversation.thread_id(), "thread-fixed");
    }

    #[test]
    fn test_push_bot_keeps_tool_data() {
        let mut conversation = Conversation::new();
        let message = conversation.push_bot("clip", Some(json!({"video": "a.mp4"})));
        assert!(message.is_bot());
        assert_eq!(message.tool_data, Some(json!({"video": "a.mp4"})));
    }

    #[test]
    fn test_lookup_helpers() {
        let mut conversation = Conversation::new();
        assert!(conversation.is_empty());
        assert!(conversation.last().is_none());

        conversation.push_user("hello");
        conversation.push_bot("hi", None);

        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation.last().map(|m| m.id), Some(2));
        assert_eq!(conversation.get(1).map(|m| m.text.as_str()), Some("hello"));
        assert!(conversation.get(7).is_none());
    }
}
