pub mod ask;
pub mod chat;
pub mod config;
pub mod health;
pub mod media;

pub use ask::handle_ask_command;
pub use chat::handle_chat_command;
pub use config::handle_config_command;
pub use health::handle_health_command;
pub use media::{handle_classify_command, handle_extract_command};
