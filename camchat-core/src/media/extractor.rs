//! Mines candidate media URLs out of an untyped `tool_data` payload.
//!
//! At every mapping level the recognised field names are read first, in the
//! fixed order of [`RECOGNIZED_FIELDS`]. A string value is one candidate and a
//! sequence contributes each of its string elements. After that, every field
//! holding a nested mapping is walked depth-first, in document order, and its
//! candidates are appended. Sequences are never descended into.
//!
//! Candidates are not de-duplicated. Extraction never fails: if the walk has
//! to stop, whatever was collected up to that point is returned.

use serde_json::{Map, Value};
use tracing::debug;

/// Deepest mapping level that is still inspected.
pub const MAX_DEPTH: usize = 64;

/// Media synonyms; each is also recognised in plural and `_url`/`_urls` form.
pub const MEDIA_SYNONYMS: [&str; 4] = ["video", "stream", "feed", "camera"];

pub const RECOGNIZED_FIELDS: [&str; 18] = [
    "url",
    "urls",
    "video",
    "videos",
    "video_url",
    "video_urls",
    "stream",
    "streams",
    "stream_url",
    "stream_urls",
    "feed",
    "feeds",
    "feed_url",
    "feed_urls",
    "camera",
    "cameras",
    "camera_url",
    "camera_urls",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkAbort {
    TooDeep { depth: usize },
}

impl std::fmt::Display for WalkAbort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalkAbort::TooDeep { depth } => {
                write!(f, "payload nested deeper than {} levels (at {})", MAX_DEPTH, depth)
            }
        }
    }
}

pub fn extract_media_urls(payload: &Value) -> Vec<String> {
    let mut found = Vec::new();

    if let Err(abort) = walk(payload, 0, &mut found) {
        debug!(
            reason = %abort,
            collected = found.len(),
            "Media extraction stopped early"
        );
    }

    found
}

fn walk(value: &Value, depth: usize, found: &mut Vec<String>) -> Result<(), WalkAbort> {
    if depth > MAX_DEPTH {
        return Err(WalkAbort::TooDeep { depth });
    }

    let Value::Object(map) = value else {
        return Ok(());
    };

    collect_recognized(map, found);

    for nested in map.values().filter(|v| v.is_object()) {
        walk(nested, depth + 1, found)?;
    }

    Ok(())
}

fn collect_recognized(map: &Map<String, Value>, found: &mut Vec<String>) {
    for field in RECOGNIZED_FIELDS {
        match map.get(field) {
            Some(Value::String(url)) => push_candidate(url, found),
            Some(Value::Array(items)) => {
                for url in items.iter().filter_map(Value::as_str) {
                    push_candidate(url, found);
                }
            }
            _ => {}
        }
    }
}

// Blank strings are not URLs.
fn push_candidate(url: &str, found: &mut Vec<String>) {
    if !url.trim().is_empty() {
        found.push(url.to_string());
    }
}
