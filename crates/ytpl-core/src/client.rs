//! HTTP client for playlist resolution
//!
//! Wraps a reqwest client configured with a realistic browser user agent
//! (the playlist page serves partial content to non-browser agents) and
//! per-request timeouts. Each fetch is a fresh, cache-disabled request;
//! no connection-level state is carried between resolution calls.

use std::time::Duration;

use crate::error::{PlaylistError, Result};
use crate::url::build_playlist_page_path;

const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const WEB_BASE_URL: &str = "https://www.youtube.com";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36";
const HTML_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Per-request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Budget for a whole pagination walk in seconds (default: 120)
    pub pagination_timeout_secs: u64,
    /// Base URL of the listing API (overridable for tests)
    pub api_base: String,
    /// Base URL of the playlist web pages (overridable for tests)
    pub web_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            pagination_timeout_secs: 120,
            api_base: API_BASE_URL.to_string(),
            web_base: WEB_BASE_URL.to_string(),
        }
    }
}

/// HTTP client wrapper for the two outbound surfaces
///
/// Handles all HTTP communication for playlist resolution:
/// - Paged requests against the YouTube Data API listing endpoint
/// - The playlist page fetch backing the scrape strategy
pub struct PlaylistClient {
    client: reqwest::Client,
    api_base: String,
    web_base: String,
    pagination_timeout: Duration,
}

impl PlaylistClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            // Results must stay fresh between calls; keep no idle connections
            .pool_max_idle_per_host(0)
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::CACHE_CONTROL,
                    "no-cache".parse().unwrap(),
                );
                headers
            })
            .build()
            .map_err(PlaylistError::HttpError)?;

        Ok(Self {
            client,
            api_base: config.api_base,
            web_base: config.web_base,
            pagination_timeout: Duration::from_secs(config.pagination_timeout_secs),
        })
    }

    /// Fetch one page of the playlist listing endpoint
    ///
    /// Requests up to 50 records and forwards `page_token` once the prior
    /// response supplied one.
    ///
    /// # Arguments
    /// * `playlist_id` - Validated playlist identifier
    /// * `api_key` - API credential
    /// * `page_token` - Continuation token from the previous page, if any
    ///
    /// # Returns
    /// The raw JSON response body
    ///
    /// # Errors
    /// - `ApiError` - Endpoint answered with a non-success status
    /// - `HttpError` - Transport-level failure
    pub async fn fetch_api_page(
        &self,
        playlist_id: &str,
        api_key: &str,
        page_token: Option<&str>,
    ) -> Result<String> {
        let url = format!("{}/playlistItems", self.api_base);
        let mut query: Vec<(&str, &str)> = vec![
            ("part", "snippet,contentDetails"),
            ("maxResults", "50"),
            ("playlistId", playlist_id),
            ("key", api_key),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response = self
            .client
            .get(&url)
            .query(&query)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(PlaylistError::HttpError)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlaylistError::ApiError {
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(PlaylistError::HttpError)
    }

    /// Fetch the rendered playlist page for the scrape strategy
    ///
    /// # Arguments
    /// * `playlist_id` - Validated playlist identifier
    ///
    /// # Returns
    /// The raw HTML body
    ///
    /// # Errors
    /// - `FetchError` - Page answered with a non-success status
    /// - `HttpError` - Transport-level failure
    pub async fn fetch_playlist_page(&self, playlist_id: &str) -> Result<String> {
        let url = format!("{}{}", self.web_base, build_playlist_page_path(playlist_id));

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, HTML_ACCEPT)
            .send()
            .await
            .map_err(PlaylistError::HttpError)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlaylistError::FetchError {
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(PlaylistError::HttpError)
    }

    /// Budget bounding a whole pagination walk
    pub fn pagination_timeout(&self) -> Duration {
        self.pagination_timeout
    }
}
