//! High-level catalog API
//!
//! Combines the HTTP client with the feed and category parsers into the
//! interface a host shell consumes: paginated video listings, category
//! labels, and the external player handoff URI.

use tracing::debug;

use crate::client::{ClientConfig, HttpClient};
use crate::error::Result;
use crate::parser::{extract_categories, parse_video_feed};
use crate::types::{CatalogPage, CategoryLabel};
use crate::url::{PAGE_SIZE, build_feed_url, build_listing_url, build_player_url};

/// Main entry point for the Al Jazeera video catalog
///
/// An ordinary value owning its HTTP client; construct one wherever the
/// host's dispatch layer needs it. Every operation is a single sequential
/// fetch-then-parse round trip with no shared state between calls.
pub struct AljazeeraCatalog {
    client: HttpClient,
}

impl AljazeeraCatalog {
    /// Create a catalog with default configuration
    ///
    /// # Errors
    /// Returns an error if HTTP client initialization fails.
    pub fn new() -> Result<Self> {
        let client = HttpClient::new()?;
        Ok(Self { client })
    }

    /// Create a catalog with custom client configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = HttpClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Fetch one page of videos for a query
    ///
    /// `start_index` is the 1-based offset of the page's first item within
    /// the full result set, per the upstream feed contract. It is passed
    /// through unclamped. At most [`PAGE_SIZE`] videos are returned, in
    /// feed order (by published date).
    ///
    /// `has_more` is true iff at least one item exists beyond the page's
    /// last shown index, i.e. `start_index + PAGE_SIZE - 1 < total_results`.
    /// Pagination is forward-only; use [`CatalogPage::next_start_index`]
    /// for the "more videos" affordance.
    ///
    /// # Errors
    /// - `Http` if the fetch fails
    /// - `MalformedFeed` if the response cannot be decoded
    pub async fn list_page(&self, query: &str, start_index: u32) -> Result<CatalogPage> {
        let url = build_feed_url(&self.client.config().feed_base_url, query, start_index);
        let body = self.client.fetch(&url).await?;
        let mut feed = parse_video_feed(&body)?;

        // The feed is asked for max-results=12, but the page bound holds
        // even if the upstream returns more
        feed.videos.truncate(PAGE_SIZE as usize);

        let has_more = u64::from(start_index) + u64::from(PAGE_SIZE) - 1 < feed.total_results;
        debug!(
            query,
            start_index,
            videos = feed.videos.len(),
            total = feed.total_results,
            has_more,
            "assembled catalog page"
        );

        Ok(CatalogPage {
            videos: feed.videos,
            total_results: feed.total_results,
            start_index,
            has_more,
        })
    }

    /// Fetch the category labels from the video listing page
    ///
    /// Labels come back in document order, verbatim, and are used as
    /// query terms for [`Self::list_page`]. An empty vector means the
    /// page had no qualifying elements.
    ///
    /// # Errors
    /// - `Http` if the fetch fails
    /// - `MalformedMarkup` if the page cannot be interpreted as markup
    pub async fn categories(&self) -> Result<Vec<CategoryLabel>> {
        let url = build_listing_url(&self.client.config().site_base_url);
        let body = self.client.fetch(&url).await?;
        extract_categories(&body)
    }

    /// Build the external player URI for a video id
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `video_id` is empty.
    pub fn player_url(&self, video_id: &str) -> Result<String> {
        build_player_url(video_id)
    }
}
