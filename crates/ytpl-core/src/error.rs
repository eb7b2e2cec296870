//! Error types for playlist resolution
//!
//! Provides a comprehensive error enum with human-readable messages
//! and Tauri-compatible serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all playlist resolution operations
///
/// Implements Display for human-readable messages and Serialize
/// for Tauri command compatibility.
#[derive(Error, Debug)]
pub enum PlaylistError {
    /// Input was not a well-formed playlist URL
    #[error("Invalid playlist URL: {0}")]
    InvalidInput(String),

    /// The listing API answered with a non-success status
    #[error("YouTube Data API error: status {status}")]
    ApiError {
        /// HTTP status code returned by the endpoint
        status: u16,
    },

    /// The playlist page fetch answered with a non-success status
    #[error("Failed to fetch playlist page: status {status}")]
    FetchError {
        /// HTTP status code returned by the page
        status: u16,
    },

    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// A listing API response body was not valid JSON
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// The pagination deadline elapsed before the walk finished
    #[error("Playlist API pagination timed out")]
    Timeout,
}

impl Serialize for PlaylistError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for playlist resolution operations
pub type Result<T> = std::result::Result<T, PlaylistError>;
