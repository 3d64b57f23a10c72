//! UI-agnostic chat state: the conversation, the input buffer and the
//! loading flag that keeps at most one request in flight.
//!
//! A submit is split in two so front ends can run the request wherever they
//! like. [`ChatSession::begin_submit`] records the user message and hands
//! back what to send; [`ChatSession::complete`] records the outcome.

use tracing::{debug, info};

use crate::client::ChatTransport;
use crate::error::CamchatResult;
use crate::models::{ChatResponse, Conversation, Message};

pub const WELCOME_MESSAGE: &str =
    "Hi! Ask me about your cameras and I'll show any footage or live feeds I find.";

/// What has to go over the wire for one submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub message: String,
    pub thread_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    conversation: Conversation,
    input: String,
    loading: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh session that opens with the assistant's greeting.
    pub fn with_welcome() -> Self {
        let mut session = Self::new();
        session.conversation.push_bot(WELCOME_MESSAGE, None);
        session
    }

    pub fn from_conversation(conversation: Conversation) -> Self {
        Self {
            conversation,
            input: String::new(),
            loading: false,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn thread_id(&self) -> &str {
        self.conversation.thread_id()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) -> Option<char> {
        self.input.pop()
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Appends the user message and marks the session busy.
    ///
    /// Returns `None` without touching any state while a request is in
    /// flight or when the trimmed input is empty.
    pub fn begin_submit(&mut self) -> Option<PendingRequest> {
        if !self.can_submit() {
            return None;
        }

        let message = self.input.trim().to_string();
        self.input.clear();
        self.conversation.push_user(message.clone());
        self.loading = true;

        debug!(thread_id = %self.thread_id(), "Submitting message");

        Some(PendingRequest {
            message,
            thread_id: self.thread_id().to_string(),
        })
    }

    /// Records the outcome of the in-flight request as exactly one bot
    /// message and clears the loading flag.
    pub fn complete(&mut self, result: CamchatResult<ChatResponse>) -> &Message {
        self.loading = false;
        match result {
            Ok(reply) => self.conversation.push_bot(reply.response, reply.tool_data),
            Err(e) => {
                info!(error_code = e.error_code(), "Showing request failure to user");
                self.conversation.push_bot(e.user_message(), None)
            }
        }
    }

    /// Runs one full turn against `transport`. `None` when nothing was sent.
    pub async fn send<T>(&mut self, transport: &T) -> Option<&Message>
    where
        T: ChatTransport + ?Sized,
    {
        let pending = self.begin_submit()?;
        let result = transport.ask(&pending.message, &pending.thread_id).await;
        Some(self.complete(result))
    }
}
