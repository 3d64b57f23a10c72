mod classifier;
mod extractor;
mod rtsp;

pub use classifier::{
    classify, classify_all, MediaItem, MediaKind, VIDEO_EXTENSIONS, VIDEO_HOSTS, VIDEO_KEYWORDS,
};
pub use extractor::{extract_media_urls, MAX_DEPTH, MEDIA_SYNONYMS, RECOGNIZED_FIELDS};
pub use rtsp::{RtspPlaceholder, RTSP_CONNECTED_MESSAGE, RTSP_IDLE_MESSAGE};

/// Extracts and classifies in one step.
pub fn media_items(payload: &serde_json::Value) -> Vec<MediaItem> {
    extract_media_urls(payload)
        .into_iter()
        .map(MediaItem::from_url)
        .collect()
}
