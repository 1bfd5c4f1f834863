use tracing::{debug, info, warn};

pub const DEFAULT_URL: &str = "http://example.com/";

// otherwise nginx might reply with 403 Forbidden
const USER_AGENT: &str = "Mozilla/5.0";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Read error: {0}")]
    Read(#[source] reqwest::Error),
}

/// Issues GET requests and hands back the whole response body as text.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .no_proxy()
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    /// Fetches `url` and returns the body decoded as UTF-8.
    ///
    /// The status code does not affect the outcome: an error page is returned
    /// like any other body. Invalid UTF-8 is replaced, never rejected.
    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        info!(url, "Fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, %status, "Server returned non-success status");
        }

        let body = response.bytes().await.map_err(FetchError::Read)?;
        debug!(url, %status, bytes = body.len(), "Read response body");

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    Fetcher::new()?.fetch_text(url).await
}
