//! HTTP client abstraction used by the Dynmap fetcher.
//!
//! The trait lets tests swap in canned responses without a network, while
//! production code goes through reqwest.
//!
//! # Example Usage:
//! ```ignore
//! use dynmap_core::http::{HttpClient, DefaultHttpClient};
//!
//! let client: Arc<dyn HttpClient<Error = Error>> = Arc::new(DefaultHttpClient::new());
//! let body = client.get(url).await?;
//! ```

use async_trait::async_trait;
use crate::Error;

/// A generic trait for making HTTP requests.
#[cfg_attr(test, mockall::automock(type Error = crate::Error;))]
#[async_trait]
pub trait HttpClient: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// GET `url` and return the whole body as text, whatever the status code.
    async fn get(&self, url: String) -> Result<String, Self::Error>;
}

#[derive(Clone, Default)]
pub struct DefaultHttpClient {
    client: reqwest::Client,
}

impl DefaultHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl HttpClient for DefaultHttpClient {
    type Error = Error;

    async fn get(&self, url: String) -> Result<String, Self::Error> {
        let response = self.client
            .get(&url)
            .send()
            .await?
            .text()
            .await?;
        Ok(response)
    }
}
