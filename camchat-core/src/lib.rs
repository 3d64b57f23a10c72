#![allow(clippy::needless_borrows_for_generic_args, clippy::derivable_impls)]

pub mod client;
pub mod config;
pub mod error;
pub mod media;
pub mod models;
pub mod session;

pub use client::{error_from_body, ChatTransport, HttpChatClient, ASK_PATH, HEALTH_PATH};
pub use config::{
    ensure_cache_dir, get_cache_dir, get_config_dir, ApiConfig, CamchatConfig, LoggingConfig,
    TuiConfig, DEFAULT_BASE_URL,
};
pub use error::{CamchatError, CamchatResult, CliErrorDisplay, NETWORK_FALLBACK_MESSAGE};
pub use media::{
    classify, classify_all, extract_media_urls, media_items, MediaItem, MediaKind,
    RtspPlaceholder, MAX_DEPTH,
};
pub use models::{
    new_thread_id, ChatRequest, ChatResponse, Conversation, ErrorDetail, Message, Sender,
};
pub use session::{ChatSession, PendingRequest, WELCOME_MESSAGE};
