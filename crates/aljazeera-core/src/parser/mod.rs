//! Parsers for the upstream feed and the category listing page

pub mod categories;
pub mod feed;

pub use categories::extract_categories;
pub use feed::{VideoFeed, parse_video_feed};
