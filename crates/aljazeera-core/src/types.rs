//! Core data types for the Al Jazeera catalog scraper
//!
//! All types are value objects created during a single request/response
//! cycle; nothing here outlives the call that produced it.

use serde::{Deserialize, Serialize};

use crate::url::PAGE_SIZE;

/// A free-text program/category name scraped from the video listing page,
/// used verbatim as a search query term.
pub type CategoryLabel = String;

/// One video entry from the catalog feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Video title (never empty)
    pub title: String,

    /// Plot/description text (may be empty)
    pub summary: String,

    /// Opaque video identifier, the last path segment of the feed's id URL
    /// (e.g. "abc123"). Never empty, never contains a path separator.
    pub video_id: String,

    /// Thumbnail URL derived from `video_id` via a fixed template;
    /// not independently validated.
    pub thumbnail_url: String,
}

/// One bounded, ordered batch of video records plus pagination metadata
///
/// Produced by [`crate::AljazeeraCatalog::list_page`]. Ordering follows the
/// feed, which is by published date per the request parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    /// Videos on this page, at most [`PAGE_SIZE`] of them
    pub videos: Vec<VideoRecord>,

    /// Total number of results the feed reports for the query
    pub total_results: u64,

    /// 1-based offset of this page's first item within the full result set
    pub start_index: u32,

    /// Whether at least one item exists beyond this page's last shown index
    pub has_more: bool,
}

impl CatalogPage {
    /// Start index for the next page, if there is one.
    ///
    /// Pagination is forward-only: there is no corresponding affordance
    /// for a previous page.
    pub fn next_start_index(&self) -> Option<u32> {
        self.has_more.then(|| self.start_index + PAGE_SIZE)
    }
}
