//! Core data types for playlist resolution
//!
//! Contains the main data structures used throughout the library.

use serde::{Deserialize, Serialize};

/// Title used when a video record carries no usable title text
pub const UNTITLED: &str = "Untitled";

/// A single entry of a resolved playlist
///
/// `url` is always the canonical watch URL embedding both the video id
/// and the playlist id. All fields implement Serialize and Deserialize
/// for Tauri compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// Video title, or `"Untitled"` when the record had none
    pub title: String,

    /// Canonical watch URL (`https://www.youtube.com/watch?v=<id>&list=<playlist>`)
    pub url: String,
}

/// Which strategy produced a resolution result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// The credentialed YouTube Data API
    Api,
    /// The playlist page's embedded data blob
    Scrape,
}

/// Result of one playlist resolution call
///
/// Constructed once per call and handed to the caller; the library
/// keeps no cache across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistResolution {
    /// Ordered, URL-deduplicated playlist entries
    pub items: Vec<PlaylistItem>,

    /// Strategy that satisfied the request
    pub source: Source,
}
