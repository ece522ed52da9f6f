use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};
use url::Url;

use dynmap_common::error::FetchError;
use dynmap_common::models::ServerStatus;
use dynmap_common::traits::StatusSource;
use crate::http::{DefaultHttpClient, HttpClient};
use crate::Error;

/// Live-data endpoint of the default world. The leading slash means it
/// replaces any path already on the base URL.
pub const STATUS_PATH: &str = "/up/world/world/";

/// Resolve [`STATUS_PATH`] against a Dynmap base URL.
///
/// Only absolute `http`/`https` URLs are accepted.
pub fn status_endpoint(base_url: &str) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: base_url.to_string(),
        reason,
    };

    let base = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
    }
    base.join(STATUS_PATH).map_err(|e| invalid(e.to_string()))
}

/// Fetches [`ServerStatus`] from a Dynmap web server. One GET per call, no
/// retries, no caching.
pub struct DynmapClient {
    http: Arc<dyn HttpClient<Error = Error>>,
}

impl DynmapClient {
    pub fn new(http: Arc<dyn HttpClient<Error = Error>>) -> Self {
        Self { http }
    }

    pub fn with_default_client() -> Self {
        Self::new(Arc::new(DefaultHttpClient::new()))
    }
}

#[async_trait]
impl StatusSource for DynmapClient {
    async fn fetch(&self, base_url: &str) -> Result<ServerStatus, FetchError> {
        let endpoint = status_endpoint(base_url)?;
        debug!("Fetching Dynmap status from {}", endpoint);

        let body = self
            .http
            .get(endpoint.to_string())
            .await
            .map_err(|e| {
                error!("Error fetching JSON from {}: {}", endpoint, e);
                FetchError::Transport(e.to_string())
            })?;

        serde_json::from_str::<ServerStatus>(&body).map_err(|e| {
            error!("Error parsing JSON from {}: {}", endpoint, e);
            FetchError::MalformedBody(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::MockHttpClient;
    use mockall::predicate::eq;

    #[test]
    fn endpoint_replaces_base_path() {
        let url = status_endpoint("https://map.example.com").unwrap();
        assert_eq!(url.as_str(), "https://map.example.com/up/world/world/");

        let url = status_endpoint("http://map.example.com:8123/dynmap/index.html").unwrap();
        assert_eq!(url.as_str(), "http://map.example.com:8123/up/world/world/");
    }

    #[test]
    fn endpoint_rejects_relative_and_foreign_urls() {
        assert!(matches!(status_endpoint("map.example.com"), Err(FetchError::InvalidUrl { .. })));
        assert!(matches!(status_endpoint("ftp://map.example.com"), Err(FetchError::InvalidUrl { .. })));
        assert!(matches!(status_endpoint(""), Err(FetchError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn parses_successful_body() {
        let mut http = MockHttpClient::new();
        http.expect_get()
            .with(eq("https://map.example.com/up/world/world/".to_string()))
            .times(1)
            .returning(|_| {
                Ok(r#"{"players":[{"name":"Steve","health":20,"armor":3}],"servertime":0,"hasStorm":false,"isThundering":false}"#.to_string())
            });

        let client = DynmapClient::new(Arc::new(http));
        let status = client.fetch("https://map.example.com").await.unwrap();
        assert_eq!(status.players.len(), 1);
        assert_eq!(status.players[0].name, "Steve");
    }

    #[tokio::test]
    async fn html_body_is_malformed() {
        let mut http = MockHttpClient::new();
        http.expect_get()
            .returning(|_| Ok("<html>502 Bad Gateway</html>".to_string()));

        let client = DynmapClient::new(Arc::new(http));
        let err = client.fetch("https://map.example.com").await.unwrap_err();
        assert!(matches!(err, FetchError::MalformedBody(_)));
    }

    #[tokio::test]
    async fn transport_error_is_reported() {
        let mut http = MockHttpClient::new();
        http.expect_get()
            .returning(|_| Err(Error::Parse("connection refused".into())));

        let client = DynmapClient::new(Arc::new(http));
        let err = client.fetch("https://map.example.com").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(msg) if msg.contains("connection refused")));
    }

    #[tokio::test]
    async fn invalid_base_never_hits_network() {
        let mut http = MockHttpClient::new();
        http.expect_get().times(0);

        let client = DynmapClient::new(Arc::new(http));
        let err = client.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }
}
