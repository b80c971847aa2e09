//! URL helper functions for the Al Jazeera catalog
//!
//! Pure builders for the upstream feed URL, the category listing page,
//! thumbnail URLs, and the external player handoff URI.

use crate::error::{AljazeeraError, Result};

/// Default base URL of the upstream video feed
pub const FEED_BASE_URL: &str = "http://gdata.youtube.com";

/// Default base URL of the Al Jazeera English site
pub const SITE_BASE_URL: &str = "http://english.aljazeera.net";

/// Channel whose uploads the feed is filtered to
pub const FEED_AUTHOR: &str = "AlJazeeraEnglish";

/// Number of videos requested per catalog page
pub const PAGE_SIZE: u32 = 12;

const PLAYER_URL_PTN: &str = "plugin://plugin.video.youtube/?action=play_video&videoid=";

/// Builds the upstream feed URL for a query and 1-based start index
///
/// All parameter values are percent-encoded, so this is total over any
/// Unicode query text. Results are ordered by published date and capped
/// at [`PAGE_SIZE`] entries per page.
///
/// # Example
/// ```
/// use aljazeera_core::url::{build_feed_url, FEED_BASE_URL};
/// let url = build_feed_url(FEED_BASE_URL, "news", 1);
/// assert_eq!(
///     url,
///     "http://gdata.youtube.com/feeds/api/videos/?q=news&author=AlJazeeraEnglish&alt=json&max-results=12&start-index=1&orderby=published"
/// );
/// ```
pub fn build_feed_url(feed_base: &str, query: &str, start_index: u32) -> String {
    format!(
        "{}/feeds/api/videos/?q={}&author={}&alt=json&max-results={}&start-index={}&orderby=published",
        feed_base,
        urlencoding::encode(query),
        FEED_AUTHOR,
        PAGE_SIZE,
        start_index,
    )
}

/// Builds the URL of the video listing page the categories are scraped from
pub fn build_listing_url(site_base: &str) -> String {
    format!("{}/video", site_base)
}

/// Builds the thumbnail URL for a video id
///
/// The URL is derived from a fixed template and never validated against
/// the image host.
pub fn build_thumbnail_url(video_id: &str) -> String {
    format!("http://i.ytimg.com/vi/{}/0.jpg", video_id)
}

/// Builds the external player URI for a video id
///
/// # Errors
/// Returns `InvalidArgument` if `video_id` is empty or whitespace only.
///
/// # Example
/// ```
/// use aljazeera_core::url::build_player_url;
/// let url = build_player_url("abc123").unwrap();
/// assert_eq!(
///     url,
///     "plugin://plugin.video.youtube/?action=play_video&videoid=abc123"
/// );
/// ```
pub fn build_player_url(video_id: &str) -> Result<String> {
    if video_id.trim().is_empty() {
        return Err(AljazeeraError::InvalidArgument(
            "video id cannot be empty".to_string(),
        ));
    }
    Ok(format!("{}{}", PLAYER_URL_PTN, video_id))
}

/// Extracts the video id from a feed-supplied identifier URL
///
/// The id is the last `/`-separated path segment. Returns `None` when
/// that segment is empty (e.g. a trailing slash or an empty input).
pub fn extract_video_id(id_url: &str) -> Option<&str> {
    let segment = id_url.rsplit('/').next().unwrap_or(id_url);
    if segment.is_empty() {
        None
    } else {
        Some(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_build_feed_url_simple() {
        let url = build_feed_url(FEED_BASE_URL, "riz khan", 1);
        assert_eq!(
            url,
            "http://gdata.youtube.com/feeds/api/videos/?q=riz%20khan&author=AlJazeeraEnglish&alt=json&max-results=12&start-index=1&orderby=published"
        );
    }

    #[test]
    fn test_build_feed_url_encodes_reserved_characters() {
        let url = build_feed_url(FEED_BASE_URL, "news & politics", 13);
        let (_, qs) = url.split_once('?').unwrap();
        let params: Vec<(String, String)> = qs
            .split('&')
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap();
                (k.to_string(), urlencoding::decode(v).unwrap().into_owned())
            })
            .collect();
        assert_eq!(
            params,
            vec![
                ("q".to_string(), "news & politics".to_string()),
                ("author".to_string(), "AlJazeeraEnglish".to_string()),
                ("alt".to_string(), "json".to_string()),
                ("max-results".to_string(), "12".to_string()),
                ("start-index".to_string(), "13".to_string()),
                ("orderby".to_string(), "published".to_string()),
            ]
        );
    }

    #[test]
    fn test_build_listing_url() {
        assert_eq!(
            build_listing_url(SITE_BASE_URL),
            "http://english.aljazeera.net/video"
        );
    }

    #[test]
    fn test_build_thumbnail_url() {
        assert_eq!(
            build_thumbnail_url("abc123"),
            "http://i.ytimg.com/vi/abc123/0.jpg"
        );
    }

    #[test]
    fn test_build_player_url_valid() {
        let url = build_player_url("abc123").unwrap();
        assert!(url.contains("abc123"));
    }

    #[test]
    fn test_build_player_url_empty_id() {
        let result = build_player_url("");
        assert!(matches!(result, Err(AljazeeraError::InvalidArgument(_))));
    }

    #[test]
    fn test_build_player_url_whitespace_id() {
        let result = build_player_url("   ");
        assert!(matches!(result, Err(AljazeeraError::InvalidArgument(_))));
    }

    #[test]
    fn test_extract_video_id_from_feed_id_url() {
        let id = extract_video_id("http://gdata.youtube.com/feeds/api/videos/abc123");
        assert_eq!(id, Some("abc123"));
    }

    #[test]
    fn test_extract_video_id_no_slashes() {
        assert_eq!(extract_video_id("abc123"), Some("abc123"));
    }

    #[test]
    fn test_extract_video_id_trailing_slash() {
        assert_eq!(extract_video_id("http://example.com/videos/"), None);
    }

    #[test]
    fn test_extract_video_id_empty() {
        assert_eq!(extract_video_id(""), None);
    }

    proptest! {
        /// The query survives a percent-encoding round trip for arbitrary
        /// Unicode input.
        #[test]
        fn prop_feed_url_query_round_trips(query in "\\PC*") {
            let url = build_feed_url(FEED_BASE_URL, &query, 1);
            let (_, qs) = url.split_once('?').unwrap();
            let encoded = qs
                .split('&')
                .find_map(|pair| pair.strip_prefix("q="))
                .unwrap();
            let decoded = urlencoding::decode(encoded).unwrap();
            prop_assert_eq!(decoded.into_owned(), query);
        }
    }
}
