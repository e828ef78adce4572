use crate::domain::ports::page_source::{PageError, PageSource};
use async_trait::async_trait;
use std::time::Duration;

/// Fetches result pages over HTTP.
pub struct ReqwestPageSource {
    client: reqwest::Client,
}

impl ReqwestPageSource {
    pub fn new(user_agent: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl PageSource for ReqwestPageSource {
    async fn get(&self, url: &str) -> Result<String, PageError> {
        let resp = self.client.get(url).send().await.map_err(to_page_error)?;

        if !resp.status().is_success() {
            return Err(PageError::Status(resp.status().as_u16()));
        }

        resp.text().await.map_err(to_page_error)
    }
}

fn to_page_error(e: reqwest::Error) -> PageError {
    if e.is_timeout() {
        PageError::Timeout
    } else {
        PageError::Transport(e.to_string())
    }
}
