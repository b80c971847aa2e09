//! Al Jazeera English Video Catalog Library
//!
//! Provides an async API for listing videos from the Al Jazeera English
//! YouTube feed and for scraping program categories from the station's
//! video listing page.
//!
//! # Overview
//!
//! The crate is built for a media-center host shell and covers three
//! concerns:
//! - A paginated catalog query engine that turns a (query, start index)
//!   pair into a page of normalized video records plus a "has more" flag
//! - A category scraper that extracts program labels from the (slightly
//!   malformed) HTML listing page
//! - Pure URL builders for the feed endpoint and the external player
//!   handoff
//!
//! # Example
//!
//! ```no_run
//! use aljazeera_core::{AljazeeraCatalog, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let catalog = AljazeeraCatalog::new()?;
//!
//!     // Scrape the available program categories
//!     let categories = catalog.categories().await?;
//!
//!     // List the first page of videos for a category
//!     if let Some(category) = categories.first() {
//!         let page = catalog.list_page(category, 1).await?;
//!         for video in &page.videos {
//!             println!("{}: {}", video.title, catalog.player_url(&video.video_id)?);
//!         }
//!         if let Some(next) = page.next_start_index() {
//!             println!("more videos from index {}", next);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Pagination
//!
//! Pages hold at most [`url::PAGE_SIZE`] videos and indices are 1-based,
//! as required by the upstream feed. Pagination is stateless and
//! forward-only: [`CatalogPage::next_start_index`] yields the start index
//! for the "more videos" affordance, and nothing is cached between calls.

mod catalog;
mod client;
mod error;
pub mod parser;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, HttpClient};

// Re-export error types
pub use error::{AljazeeraError, Result};

// Re-export parser functions
pub use parser::{VideoFeed, extract_categories, parse_video_feed};

// Re-export main catalog API
pub use catalog::AljazeeraCatalog;

// Re-export data types
pub use types::{CatalogPage, CategoryLabel, VideoRecord};

// Re-export URL helpers for convenience
pub use url::{build_feed_url, build_player_url, build_thumbnail_url, extract_video_id};
