use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::{PageResolver, error::ResolveError, extract::extract_stream_url, page::PageClient};

pub const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolves intermediary pages that embed their stream in a `channelData`
/// script object.
pub struct StreamResolver {
    page: PageClient,
}

impl StreamResolver {
    pub fn new(
        client: Client,
        user_agent: &str,
        referer: &str,
        timeout: Duration,
    ) -> Result<Self, ResolveError> {
        Ok(Self {
            page: PageClient::new(client, user_agent, referer, timeout)?,
        })
    }

    /// Fetches the page and runs both extraction strategies over it.
    pub async fn try_resolve(&self, page_url: &str) -> Result<String, ResolveError> {
        Url::parse(page_url).map_err(|e| ResolveError::InvalidUrl(format!("{page_url}: {e}")))?;

        let body = self.page.fetch_text(page_url).await?;

        let extraction = extract_stream_url(&body).ok_or_else(|| ResolveError::NoStreamFound {
            url: page_url.to_string(),
        })?;

        debug!(
            page = %page_url,
            strategy = ?extraction.strategy,
            "Resolved stream {}",
            extraction.stream_url
        );
        Ok(extraction.stream_url)
    }
}

#[async_trait]
impl PageResolver for StreamResolver {
    async fn resolve(&self, page_url: &str) -> Option<String> {
        match self.try_resolve(page_url).await {
            Ok(stream_url) => Some(stream_url),
            Err(ResolveError::NoStreamFound { .. }) => None,
            Err(e) => {
                warn!("  Error resolving {page_url}: {e}");
                None
            }
        }
    }
}
