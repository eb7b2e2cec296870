//! Parsers for the playlist page's embedded data
//!
//! The scrape strategy locates one JSON object inside the page markup,
//! then walks it for video records.

mod embedded;
mod walker;

pub use embedded::locate_embedded_json;
pub(crate) use walker::collect_video_nodes;
