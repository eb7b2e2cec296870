//! URL helper functions for playlist resolution
//!
//! Provides the playlist identifier extractor and builders for the
//! canonical watch and playlist page URLs.

use regex::Regex;
use reqwest::Url;

use crate::error::{PlaylistError, Result};

const WATCH_BASE_URL: &str = "https://www.youtube.com";

/// Alphabet a playlist identifier must match, anchored on both ends
const PLAYLIST_ID_PATTERN: &str = r"^[A-Za-z0-9_-]+$";

/// Extracts and validates the playlist identifier from a user-supplied URL
///
/// The identifier is read from the `list` query parameter and accepted
/// only if non-empty and matching `^[A-Za-z0-9_-]+$`. Pure function,
/// no network access.
///
/// # Arguments
/// * `input_url` - User-supplied URL string (e.g., "https://www.youtube.com/playlist?list=PLabc123")
///
/// # Returns
/// The validated playlist identifier
///
/// # Errors
/// Returns `InvalidInput` if the input is not a well-formed URL or the
/// `list` parameter is missing or malformed
///
/// # Example
/// ```
/// use ytpl_core::url::extract_playlist_id;
/// let id = extract_playlist_id("https://www.youtube.com/playlist?list=PLabc123").unwrap();
/// assert_eq!(id, "PLabc123");
/// ```
pub fn extract_playlist_id(input_url: &str) -> Result<String> {
    let url = Url::parse(input_url)
        .map_err(|_| PlaylistError::InvalidInput(input_url.to_string()))?;

    let list = url
        .query_pairs()
        .find(|(key, _)| key == "list")
        .map(|(_, value)| value.to_string())
        .ok_or_else(|| PlaylistError::InvalidInput(input_url.to_string()))?;

    let Ok(pattern) = Regex::new(PLAYLIST_ID_PATTERN) else {
        return Err(PlaylistError::InvalidInput(input_url.to_string()));
    };
    if !pattern.is_match(&list) {
        return Err(PlaylistError::InvalidInput(input_url.to_string()));
    }

    Ok(list)
}

/// Builds the canonical watch URL for a video inside a playlist
///
/// # Arguments
/// * `video_id` - Video id (e.g., "dQw4w9WgXcQ")
/// * `playlist_id` - Validated playlist identifier
///
/// # Returns
/// Canonical watch URL embedding both ids
///
/// # Example
/// ```
/// use ytpl_core::url::build_watch_url;
/// let url = build_watch_url("v1", "PLabc123");
/// assert_eq!(url, "https://www.youtube.com/watch?v=v1&list=PLabc123");
/// ```
pub fn build_watch_url(video_id: &str, playlist_id: &str) -> String {
    format!(
        "{}/watch?v={}&list={}",
        WATCH_BASE_URL, video_id, playlist_id
    )
}

/// Builds the playlist page path for the scrape strategy
///
/// Forces `hl=en` so the page's embedded data is rendered with a stable
/// locale, and percent-encodes the identifier.
///
/// # Arguments
/// * `playlist_id` - Validated playlist identifier
///
/// # Returns
/// Path with query string, to be joined onto the web base URL
///
/// # Example
/// ```
/// use ytpl_core::url::build_playlist_page_path;
/// let path = build_playlist_page_path("PLabc123");
/// assert_eq!(path, "/playlist?hl=en&list=PLabc123");
/// ```
pub fn build_playlist_page_path(playlist_id: &str) -> String {
    let encoded = urlencoding::encode(playlist_id);
    format!("/playlist?hl=en&list={}", encoded)
}
