//! Tauri commands for the playlist resolver
//!
//! This module contains all Tauri command implementations.

use tauri::State;
use ytpl_core::PlaylistResolution;

use crate::ResolverState;

/// Resolve a playlist URL into its items
///
/// # Arguments
/// * `state` - Managed ResolverState from Tauri
/// * `url` - User-supplied playlist URL
///
/// # Returns
/// The resolved items and the strategy that produced them
///
/// # Errors
/// Returns error message as String if resolution fails
#[tauri::command]
pub async fn resolve_playlist(
    state: State<'_, ResolverState>,
    url: String,
) -> Result<PlaylistResolution, String> {
    let api_key = std::env::var("YOUTUBE_API_KEY").ok();
    state
        .resolver
        .resolve(&url, api_key.as_deref())
        .await
        .map_err(|e| e.to_string())
}
