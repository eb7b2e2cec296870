//! YouTube Playlist Resolver Core Library
//!
//! Resolves a public playlist URL into an ordered, deduplicated list of
//! (title, canonical watch URL) entries.
//!
//! # Overview
//!
//! Two independent strategies back every resolution:
//! - With an API credential, paged consumption of the YouTube Data API
//!   `playlistItems` endpoint — the authoritative listing.
//! - Without one (or when the API fails), the playlist page is fetched
//!   and its embedded `ytInitialData` JSON blob is located and walked
//!   for video records.
//!
//! The identifier is always validated first; a bad URL never reaches the
//! network. Any API failure falls back to the scrape strategy, whose
//! empty result is a valid success. Within one result, item URLs are
//! unique.
//!
//! # Example
//!
//! ```no_run
//! use ytpl_core::{PlaylistResolver, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let resolver = PlaylistResolver::new()?;
//!
//!     let api_key = std::env::var("YOUTUBE_API_KEY").ok();
//!     let resolution = resolver
//!         .resolve(
//!             "https://www.youtube.com/playlist?list=PLabc123",
//!             api_key.as_deref(),
//!         )
//!         .await?;
//!
//!     for item in &resolution.items {
//!         println!("{}: {}", item.title, item.url);
//!     }
//!     println!("resolved via {:?}", resolution.source);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Freshness
//!
//! Playlists change between calls; the library keeps no cache and every
//! resolution issues fresh, cache-disabled requests.

mod api;
mod client;
mod error;
pub mod parser;
mod resolver;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, PlaylistClient};

// Re-export error types
pub use error::{PlaylistError, Result};

// Re-export the listing-endpoint paginator
pub use api::fetch_via_api;

// Re-export parser entry point
pub use parser::locate_embedded_json;

// Re-export main resolver API
pub use resolver::PlaylistResolver;

// Re-export data types
pub use types::{PlaylistItem, PlaylistResolution, Source, UNTITLED};

// Re-export URL helper functions for convenience
pub use url::{build_playlist_page_path, build_watch_url, extract_playlist_id};
