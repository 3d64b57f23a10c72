//! Heuristic URL classifier.
//!
//! Plain substring matching on the lower-cased URL. It over-matches on
//! purpose (any URL mentioning "video" counts as a video) because a wrong
//! guess only costs a differently styled panel, and every panel still offers
//! the raw link.

use serde::{Deserialize, Serialize};

pub const VIDEO_EXTENSIONS: [&str; 10] = [
    ".mp4", ".webm", ".ogg", ".avi", ".mov", ".wmv", ".flv", ".mkv", ".m4v", ".3gp",
];

pub const VIDEO_KEYWORDS: [&str; 6] = ["video", "stream", "live", "cam", "feed", "rtsp"];

pub const VIDEO_HOSTS: [&str; 6] = [
    "youtube.com",
    "youtu.be",
    "vimeo.com",
    "twitch.tv",
    "stream",
    "video",
];

const RTSP_SCHEME: &str = "rtsp://";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Video,
    RtspStream,
    Link,
}

impl MediaKind {
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Video => "Video",
            MediaKind::RtspStream => "RTSP stream",
            MediaKind::Link => "Link",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MediaKind::Video => "▶",
            MediaKind::RtspStream => "◉",
            MediaKind::Link => "↗",
        }
    }

    pub fn is_media(&self) -> bool {
        !matches!(self, MediaKind::Link)
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Video => write!(f, "video"),
            MediaKind::RtspStream => write!(f, "rtsp"),
            MediaKind::Link => write!(f, "link"),
        }
    }
}

/// A candidate URL paired with its render-time classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub url: String,
    pub kind: MediaKind,
}

impl MediaItem {
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let kind = classify(&url);
        Self { url, kind }
    }
}

/// Decides how a single URL should be presented.
///
/// An `rtsp://` scheme wins over everything else; otherwise any extension,
/// keyword or host hit makes it a video; everything left is a plain link.
pub fn classify(url: &str) -> MediaKind {
    let lower = url.trim().to_lowercase();

    if lower.starts_with(RTSP_SCHEME) {
        return MediaKind::RtspStream;
    }

    let contains_any = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

    if contains_any(&VIDEO_EXTENSIONS) || contains_any(&VIDEO_KEYWORDS) || contains_any(&VIDEO_HOSTS)
    {
        MediaKind::Video
    } else {
        MediaKind::Link
    }
}

pub fn classify_all<S: AsRef<str>>(urls: &[S]) -> Vec<MediaItem> {
    urls.iter().map(|u| MediaItem::from_url(u.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rtsp_scheme_any_case() {
        for url in [
            "rtsp://10.0.0.2:554/stream1",
            "RTSP://CAMERA.LOCAL/MAIN",
            "Rtsp://host/clip.mp4",
            "  rtsp://padded/feed",
        ] {
            assert_eq!(classify(url), MediaKind::RtspStream, "{url}");
        }
    }

    #[test]
    fn test_rtsp_only_as_scheme() {
        // "rtsp" elsewhere in the URL is only a video keyword
        assert_eq!(classify("http://relay.local/rtsp/cam1"), MediaKind::Video);
        assert_eq!(classify("rtspx://host/path"), MediaKind::Video);
    }

    #[test]
    fn test_every_extension_is_video() {
        for ext in VIDEO_EXTENSIONS {
            let url = format!("https://cdn.example.com/files/clip{}", ext);
            assert_eq!(classify(&url), MediaKind::Video, "{url}");
        }
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert_eq!(classify("https://example.com/CLIP.MP4"), MediaKind::Video);
        assert_eq!(classify("https://example.com/a.MoV?token=1"), MediaKind::Video);
    }

    #[test]
    fn test_keywords_are_video() {
        for url in [
            "https://example.com/live/now",
            "https://example.com/cam/3",
            "https://example.com/feed",
            "https://example.com/my-video-page",
            "https://example.com/streaming",
        ] {
            assert_eq!(classify(url), MediaKind::Video, "{url}");
        }
    }

    #[test]
    fn test_hosts_are_video() {
        for url in [
            "https://www.youtube.com/watch?v=abc",
            "https://youtu.be/abc",
            "https://vimeo.com/12345",
            "https://www.twitch.tv/somebody",
        ] {
            assert_eq!(classify(url), MediaKind::Video, "{url}");
        }
    }

    #[test]
    fn test_known_over_matches_are_kept() {
        assert_eq!(
            classify("https://example.com/video-tutorial.html"),
            MediaKind::Video
        );
        assert_eq!(classify("https://example.com/camera-manual.pdf"), MediaKind::Video);
        assert_eq!(classify("https://olive.example.com/"), MediaKind::Video);
    }

    #[test]
    fn test_bare_extension_is_not_video() {
        assert_eq!(classify("https://x/dl?format=mp4"), MediaKind::Link);
        assert_eq!(classify("https://x/dl?format=.mp4"), MediaKind::Video);
    }

    #[test]
    fn test_plain_links() {
        for url in [
            "b",
            "https://example.com/",
            "https://docs.example.com/report.pdf",
            "mailto:ops@example.com",
            "",
        ] {
            assert_eq!(classify(url), MediaKind::Link, "{url}");
        }
    }

    #[test]
    fn test_media_item_from_url() {
        let item = MediaItem::from_url("a.mp4");
        assert_eq!(item.url, "a.mp4");
        assert_eq!(item.kind, MediaKind::Video);
    }

    #[test]
    fn test_classify_all_keeps_order() {
        let items = classify_all(&["b", "rtsp://x", "a.webm"]);
        let kinds: Vec<MediaKind> = items.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![MediaKind::Link, MediaKind::RtspStream, MediaKind::Video]
        );
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(MediaKind::Video.to_string(), "video");
        assert_eq!(MediaKind::RtspStream.to_string(), "rtsp");
        assert_eq!(MediaKind::Link.label(), "Link");
        assert!(MediaKind::RtspStream.is_media());
        assert!(!MediaKind::Link.is_media());
    }
}
