use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("request timed out")]
    Timeout,

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Retrieves a remote document body by URL.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn get(&self, url: &str) -> Result<String, PageError>;
}
