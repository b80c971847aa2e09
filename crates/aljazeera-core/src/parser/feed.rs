//! JSON feed parser for the upstream video catalog
//!
//! Decodes the gdata-style search feed into typed [`VideoRecord`]s in one
//! pass. The schema is explicit: optional fields are `Option`, everything
//! else is required, and "the feed has no entries" is represented by the
//! absence of the `entry` field rather than by a decode failure.

use serde::Deserialize;

use crate::error::{AljazeeraError, Result};
use crate::types::VideoRecord;
use crate::url::{build_thumbnail_url, extract_video_id};

/// Videos and total-count decoded from one feed response
///
/// `total_results` is the size of the full result set for the query, not
/// of this batch; pagination metadata is derived from it by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFeed {
    pub videos: Vec<VideoRecord>,
    pub total_results: u64,
}

// The gdata JSON convention wraps every scalar as {"$t": "..."}.
#[derive(Debug, Deserialize)]
struct Text {
    #[serde(rename = "$t")]
    value: String,
}

#[derive(Debug, Deserialize)]
struct FeedDocument {
    feed: Feed,
}

#[derive(Debug, Deserialize)]
struct Feed {
    // Absent on zero-result queries
    entry: Option<Vec<Entry>>,
    #[serde(rename = "openSearch$totalResults")]
    total_results: Option<Text>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    title: Text,
    id: Text,
    #[serde(rename = "media$group")]
    media_group: MediaGroup,
}

#[derive(Debug, Deserialize)]
struct MediaGroup {
    #[serde(rename = "media$description")]
    description: Text,
}

/// Parses a feed response body into videos and a total count
///
/// # Errors
/// Returns `MalformedFeed` if the body is not valid JSON for the schema,
/// if any entry is missing a required field or has an empty title or id,
/// or if the total-count field is absent or non-numeric while entries are
/// present. A response whose `feed.entry` field is absent is a valid
/// zero-result feed, not an error.
pub fn parse_video_feed(body: &[u8]) -> Result<VideoFeed> {
    let document: FeedDocument = serde_json::from_slice(body)
        .map_err(|e| AljazeeraError::MalformedFeed(e.to_string()))?;

    let Some(entries) = document.feed.entry else {
        return Ok(VideoFeed {
            videos: Vec::new(),
            total_results: 0,
        });
    };

    let videos = entries
        .into_iter()
        .map(parse_entry)
        .collect::<Result<Vec<_>>>()?;

    let total_results = document
        .feed
        .total_results
        .ok_or_else(|| AljazeeraError::MalformedFeed("missing total results".to_string()))?
        .value
        .parse::<u64>()
        .map_err(|_| AljazeeraError::MalformedFeed("non-numeric total results".to_string()))?;

    Ok(VideoFeed {
        videos,
        total_results,
    })
}

fn parse_entry(entry: Entry) -> Result<VideoRecord> {
    let title = entry.title.value;
    if title.is_empty() {
        return Err(AljazeeraError::MalformedFeed(
            "entry has an empty title".to_string(),
        ));
    }

    let video_id = extract_video_id(&entry.id.value)
        .ok_or_else(|| {
            AljazeeraError::MalformedFeed(format!("entry id has no video id: {}", entry.id.value))
        })?
        .to_string();

    let thumbnail_url = build_thumbnail_url(&video_id);

    Ok(VideoRecord {
        title,
        summary: entry.media_group.description.value,
        video_id,
        thumbnail_url,
    })
}
