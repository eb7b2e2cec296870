//! Playlist resolver
//!
//! High-level API combining the HTTP client, the listing-endpoint
//! paginator and the embedded-data parsers. The resolver owns the
//! strategy decision: the credentialed Data API when a key is supplied,
//! the playlist page's embedded data otherwise or as fallback.

use crate::api::fetch_via_api;
use crate::client::{ClientConfig, PlaylistClient};
use crate::error::Result;
use crate::parser::{collect_video_nodes, locate_embedded_json};
use crate::types::{PlaylistItem, PlaylistResolution, Source};
use crate::url::{build_watch_url, extract_playlist_id};

/// Main resolver API
///
/// Stateless across calls: every resolution runs on fresh requests and
/// returns a result that is never cached, so concurrent calls need no
/// coordination.
pub struct PlaylistResolver {
    client: PlaylistClient,
}

impl PlaylistResolver {
    /// Create a new resolver with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = PlaylistClient::new()?;
        Ok(Self { client })
    }

    /// Create a new resolver with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = PlaylistClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Resolve a playlist URL into an ordered, deduplicated item list
    ///
    /// The identifier is validated before any network access. With a
    /// non-empty credential the Data API is attempted first and any
    /// failure there falls back to the scrape strategy; without one the
    /// scrape strategy runs directly. Each strategy is attempted exactly
    /// once.
    ///
    /// # Arguments
    /// * `input_url` - User-supplied playlist URL
    /// * `api_key` - Optional Data API credential
    ///
    /// # Returns
    /// The resolved items and the strategy that produced them. An empty
    /// item list from the scrape strategy is a valid success.
    ///
    /// # Errors
    /// - `InvalidInput` - The URL or its `list` parameter is malformed
    /// - `FetchError` / `HttpError` - The playlist page fetch failed
    ///   (fatal: no further fallback exists)
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> ytpl_core::Result<()> {
    /// use ytpl_core::PlaylistResolver;
    /// let resolver = PlaylistResolver::new()?;
    /// let resolution = resolver
    ///     .resolve("https://www.youtube.com/playlist?list=PLabc123", None)
    ///     .await?;
    /// for item in &resolution.items {
    ///     println!("{}: {}", item.title, item.url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn resolve(
        &self,
        input_url: &str,
        api_key: Option<&str>,
    ) -> Result<PlaylistResolution> {
        let playlist_id = extract_playlist_id(input_url)?;

        if let Some(key) = api_key.filter(|key| !key.is_empty()) {
            match fetch_via_api(&self.client, &playlist_id, key).await {
                Ok(items) => {
                    tracing::debug!(%playlist_id, "resolved via Data API");
                    return Ok(PlaylistResolution {
                        items,
                        source: Source::Api,
                    });
                }
                Err(error) => {
                    tracing::debug!(%playlist_id, %error, "Data API failed, falling back to scrape");
                }
            }
        } else {
            tracing::debug!(%playlist_id, "no API credential, using scrape");
        }

        let items = self.scrape_playlist(&playlist_id).await?;
        Ok(PlaylistResolution {
            items,
            source: Source::Scrape,
        })
    }

    /// Resolve through the Data API only, without scrape fallback
    ///
    /// # Arguments
    /// * `playlist_id` - Validated playlist identifier
    /// * `api_key` - Data API credential
    ///
    /// # Errors
    /// - `ApiError` - A page answered with a non-success status
    /// - `ParseError` / `Timeout` / `HttpError` - See [`crate::fetch_via_api`]
    pub async fn resolve_via_api(
        &self,
        playlist_id: &str,
        api_key: &str,
    ) -> Result<Vec<PlaylistItem>> {
        fetch_via_api(&self.client, playlist_id, api_key).await
    }

    /// Resolve through the playlist page's embedded data
    ///
    /// Fetches the rendered page, locates the embedded JSON blob and
    /// walks it for video records. A page without a recognizable blob
    /// yields an empty list, not an error.
    ///
    /// # Arguments
    /// * `playlist_id` - Validated playlist identifier
    ///
    /// # Errors
    /// - `FetchError` - Page answered with a non-success status
    /// - `HttpError` - Transport-level failure
    pub async fn scrape_playlist(&self, playlist_id: &str) -> Result<Vec<PlaylistItem>> {
        let html = self.client.fetch_playlist_page(playlist_id).await?;

        let Some(data) = locate_embedded_json(&html) else {
            tracing::debug!(%playlist_id, "no embedded data found in playlist page");
            return Ok(Vec::new());
        };

        let items = collect_video_nodes(&data)
            .into_iter()
            .map(|node| PlaylistItem {
                title: node.title,
                url: build_watch_url(&node.id, playlist_id),
            })
            .collect();

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaylistError;
    use serde_json::json;
    use wiremock::matchers::{any, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_resolver(server: &MockServer) -> PlaylistResolver {
        PlaylistResolver::with_config(ClientConfig {
            api_base: server.uri(),
            web_base: server.uri(),
            ..ClientConfig::default()
        })
        .unwrap()
    }

    fn playlist_page_html() -> String {
        let data = json!({
            "contents": [
                {"playlistVideoRenderer": {"videoId": "v2", "title": {"simpleText": "T2"}}}
            ]
        });
        format!("<html><script>var ytInitialData = {};</script></html>", data)
    }

    #[test]
    fn test_resolver_creation() {
        let resolver = PlaylistResolver::new();
        assert!(resolver.is_ok());
    }

    #[tokio::test]
    async fn test_resolve_with_credential_uses_api() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/playlistItems"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {"contentDetails": {"videoId": "v1"}, "snippet": {"title": "T1"}}
                ]
            })))
            .mount(&server)
            .await;

        let resolver = test_resolver(&server);
        let resolution = resolver
            .resolve("https://www.youtube.com/playlist?list=PLabc123", Some("secret"))
            .await
            .unwrap();

        assert_eq!(resolution.source, Source::Api);
        assert_eq!(resolution.items.len(), 1);
        assert_eq!(resolution.items[0].title, "T1");
        assert_eq!(
            resolution.items[0].url,
            "https://www.youtube.com/watch?v=v1&list=PLabc123"
        );
    }

    #[tokio::test]
    async fn test_resolve_falls_back_to_scrape_on_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/playlistItems"))
            .respond_with(ResponseTemplate::new(403))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/playlist"))
            .respond_with(ResponseTemplate::new(200).set_body_string(playlist_page_html()))
            .expect(1)
            .mount(&server)
            .await;

        let resolver = test_resolver(&server);
        let resolution = resolver
            .resolve("https://www.youtube.com/playlist?list=PLabc123", Some("secret"))
            .await
            .unwrap();

        assert_eq!(resolution.source, Source::Scrape);
        assert_eq!(resolution.items.len(), 1);
        assert_eq!(resolution.items[0].title, "T2");
        assert_eq!(
            resolution.items[0].url,
            "https://www.youtube.com/watch?v=v2&list=PLabc123"
        );
    }

    #[tokio::test]
    async fn test_resolve_without_credential_scrapes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/playlist"))
            .respond_with(ResponseTemplate::new(200).set_body_string(playlist_page_html()))
            .mount(&server)
            .await;

        let resolver = test_resolver(&server);
        let resolution = resolver
            .resolve("https://www.youtube.com/playlist?list=PLabc123", None)
            .await
            .unwrap();

        assert_eq!(resolution.source, Source::Scrape);
        assert_eq!(resolution.items.len(), 1);
        assert_eq!(resolution.items[0].title, "T2");
    }

    #[tokio::test]
    async fn test_resolve_empty_credential_skips_api() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/playlistItems"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/playlist"))
            .respond_with(ResponseTemplate::new(200).set_body_string(playlist_page_html()))
            .expect(1)
            .mount(&server)
            .await;

        let resolver = test_resolver(&server);
        let resolution = resolver
            .resolve("https://www.youtube.com/playlist?list=PLabc123", Some(""))
            .await
            .unwrap();

        assert_eq!(resolution.source, Source::Scrape);
    }

    #[tokio::test]
    async fn test_resolve_invalid_input_issues_no_request() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let resolver = test_resolver(&server);
        let result = resolver.resolve("not-a-url", Some("secret")).await;

        assert!(matches!(result, Err(PlaylistError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_resolve_page_without_embedded_data_is_empty_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/playlist"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><body>consent wall</body></html>"),
            )
            .mount(&server)
            .await;

        let resolver = test_resolver(&server);
        let resolution = resolver
            .resolve("https://www.youtube.com/playlist?list=PLabc123", None)
            .await
            .unwrap();

        assert_eq!(resolution.source, Source::Scrape);
        assert!(resolution.items.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_page_fetch_failure_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/playlist"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let resolver = test_resolver(&server);
        let result = resolver
            .resolve("https://www.youtube.com/playlist?list=PLabc123", None)
            .await;

        assert!(matches!(
            result,
            Err(PlaylistError::FetchError { status: 503 })
        ));
    }

    #[tokio::test]
    async fn test_resolve_fallback_fetch_failure_surfaces() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/playlistItems"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/playlist"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let resolver = test_resolver(&server);
        let result = resolver
            .resolve("https://www.youtube.com/playlist?list=PLabc123", Some("secret"))
            .await;

        assert!(matches!(
            result,
            Err(PlaylistError::FetchError { status: 404 })
        ));
    }

    #[tokio::test]
    async fn test_resolve_result_urls_are_unique() {
        let server = MockServer::start().await;
        let data = json!({
            "contents": [
                {"playlistVideoRenderer": {"videoId": "v2", "title": {"simpleText": "once"}}},
                {"nested": {"playlistVideoRenderer": {"videoId": "v2", "title": {"simpleText": "again"}}}}
            ]
        });
        Mock::given(method("GET"))
            .and(path("/playlist"))
            .respond_with(ResponseTemplate::new(200).set_body_string(format!(
                "<html><script>var ytInitialData = {};</script></html>",
                data
            )))
            .mount(&server)
            .await;

        let resolver = test_resolver(&server);
        let resolution = resolver
            .resolve("https://www.youtube.com/playlist?list=PLabc123", None)
            .await
            .unwrap();

        assert_eq!(resolution.items.len(), 1);
    }
}
