mod conversation;
mod message;

pub use conversation::{new_thread_id, Conversation};
pub use message::{ChatRequest, ChatResponse, ErrorDetail, Message, Sender};
