use async_trait::async_trait;
use crate::error::FetchError;
use crate::models::ServerStatus;

/// Anything that can produce a live [`ServerStatus`] for a Dynmap base URL.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch(&self, base_url: &str) -> Result<ServerStatus, FetchError>;
}
