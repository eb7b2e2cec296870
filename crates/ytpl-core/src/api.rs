//! Paged consumption of the playlist listing endpoint
//!
//! Walks the YouTube Data API `playlistItems` endpoint page by page,
//! normalizing each record into a [`PlaylistItem`] and deduplicating by
//! the resulting watch URL.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::client::PlaylistClient;
use crate::error::{PlaylistError, Result};
use crate::types::{PlaylistItem, UNTITLED};
use crate::url::build_watch_url;

/// Hard ceiling on page requests per resolution call
///
/// A malformed token chain must not loop forever; hitting the ceiling
/// keeps the pages collected so far instead of failing the call.
const MAX_PAGES: usize = 200;

/// Serde view of one listing page
///
/// Records stay untyped (`Value`) so a single malformed record can never
/// fail deserialization of the whole page.
#[derive(Debug, Deserialize)]
struct ListingPage {
    #[serde(default)]
    items: Vec<Value>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

/// Resolves a playlist through the credentialed listing endpoint
///
/// Issues successive page requests (up to 50 records each), chaining
/// `pageToken` until the endpoint stops supplying one, the page ceiling
/// is reached, or the pagination budget elapses.
///
/// # Arguments
/// * `client` - HTTP client
/// * `playlist_id` - Validated playlist identifier
/// * `api_key` - API credential
///
/// # Returns
/// Items in page/record order, deduplicated by URL (first occurrence kept)
///
/// # Errors
/// - `ApiError` - Any page answered with a non-success status (fail-fast,
///   no partial results for this strategy)
/// - `ParseError` - A page body was not valid JSON
/// - `Timeout` - The pagination budget elapsed
/// - `HttpError` - Transport-level failure
pub async fn fetch_via_api(
    client: &PlaylistClient,
    playlist_id: &str,
    api_key: &str,
) -> Result<Vec<PlaylistItem>> {
    tokio::time::timeout(
        client.pagination_timeout(),
        walk_pages(client, playlist_id, api_key),
    )
    .await
    .map_err(|_| PlaylistError::Timeout)?
}

async fn walk_pages(
    client: &PlaylistClient,
    playlist_id: &str,
    api_key: &str,
) -> Result<Vec<PlaylistItem>> {
    let mut items: Vec<PlaylistItem> = Vec::new();
    let mut page_token: Option<String> = None;

    for _ in 0..MAX_PAGES {
        let body = client
            .fetch_api_page(playlist_id, api_key, page_token.as_deref())
            .await?;
        let page: ListingPage =
            serde_json::from_str(&body).map_err(|e| PlaylistError::ParseError(e.to_string()))?;

        for record in &page.items {
            if let Some(item) = project_record(record, playlist_id) {
                items.push(item);
            }
        }

        page_token = page.next_page_token;
        if page_token.is_none() {
            break;
        }
    }

    if page_token.is_some() {
        tracing::debug!(%playlist_id, "page ceiling reached, keeping partial results");
    }

    Ok(dedup_by_url(items))
}

/// Projects one listing record into a playlist item
///
/// The video id comes from `contentDetails.videoId`; records without a
/// usable id are dropped silently. The title comes from `snippet.title`,
/// defaulting to `"Untitled"` when absent or not a string.
fn project_record(record: &Value, playlist_id: &str) -> Option<PlaylistItem> {
    let video_id = record
        .get("contentDetails")
        .and_then(|details| details.get("videoId"))
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())?;

    let title = record
        .get("snippet")
        .and_then(|snippet| snippet.get("title"))
        .and_then(Value::as_str)
        .unwrap_or(UNTITLED)
        .to_string();

    Some(PlaylistItem {
        title,
        url: build_watch_url(video_id, playlist_id),
    })
}

/// Stable dedup by URL, keeping the first occurrence
fn dedup_by_url(items: Vec<PlaylistItem>) -> Vec<PlaylistItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.url.clone()))
        .collect()
}
