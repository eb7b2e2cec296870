//! Playlist Resolver Tauri Integration
//!
//! Provides a Tauri plugin for frontend integration with the playlist
//! resolver.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(ytpl_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then invoke the command from the frontend:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! const resolution = await invoke('plugin:ytpl|resolve_playlist', {
//!   url: 'https://www.youtube.com/playlist?list=PLabc123'
//! });
//! // resolution.items -> [{title, url}, ...], resolution.source -> "api" | "scrape"
//! ```
//!
//! The YouTube Data API credential is read from the `YOUTUBE_API_KEY`
//! environment variable; without one, every resolution uses the scrape
//! strategy.

use std::sync::Arc;

use tauri::{
    Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};
use ytpl_core::PlaylistResolver;

mod commands;

/// Shared resolver handle for Tauri commands
///
/// The resolver is stateless across calls, so concurrent commands share
/// it behind an `Arc` with no further coordination.
pub struct ResolverState {
    pub(crate) resolver: Arc<PlaylistResolver>,
}

impl ResolverState {
    /// Create a new ResolverState with default configuration
    ///
    /// # Errors
    /// Returns error string if resolver initialization fails
    pub fn new() -> Result<Self, String> {
        let resolver = PlaylistResolver::new().map_err(|e| e.to_string())?;
        Ok(Self {
            resolver: Arc::new(resolver),
        })
    }
}

impl Default for ResolverState {
    fn default() -> Self {
        Self::new().expect("Failed to create default ResolverState")
    }
}

/// Initialize the ytpl plugin
///
/// # Returns
/// A configured TauriPlugin ready to be registered with the Tauri
/// application
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("ytpl")
        .invoke_handler(tauri::generate_handler![commands::resolve_playlist])
        .setup(|app, _api| {
            let state = ResolverState::new().map_err(Box::<dyn std::error::Error>::from)?;
            app.manage(state);
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use ytpl_core::{PlaylistItem, PlaylistResolution, Source};
