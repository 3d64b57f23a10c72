mod conversation;
mod help;

pub use conversation::{conversation_lines, wrap_text, ConversationView};
pub use help::HelpModal;
