use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder};
use std::time::Duration;

use super::error::ResolveError;

/// HTTP access to intermediary pages.
///
/// Every request carries the same browser-like header set plus the referer the
/// intermediary host expects, and is bounded by a fixed timeout.
#[derive(Debug, Clone)]
pub struct PageClient {
    client: Client,
    headers: HeaderMap,
    timeout: Duration,
}

impl PageClient {
    pub fn new(
        client: Client,
        user_agent: &str,
        referer: &str,
        timeout: Duration,
    ) -> Result<Self, ResolveError> {
        let mut page = Self {
            client,
            headers: HeaderMap::new(),
            timeout,
        };
        page.add_header(header::USER_AGENT.as_str(), user_agent)?;
        page.add_header(
            header::ACCEPT.as_str(),
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )?;
        page.add_header(header::ACCEPT_LANGUAGE.as_str(), "en-US,en;q=0.9")?;
        page.add_header(header::REFERER.as_str(), referer)?;
        Ok(page)
    }

    pub fn add_header(&mut self, key: &str, value: &str) -> Result<(), ResolveError> {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| ResolveError::InvalidHeader(format!("{key}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ResolveError::InvalidHeader(format!("{key}: {e}")))?;
        self.headers.insert(name, value);
        Ok(())
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        self.client
            .get(url)
            .headers(self.headers.clone())
            .timeout(self.timeout)
    }

    /// Fetches a page body, treating any non-success status as an error.
    pub async fn fetch_text(&self, url: &str) -> Result<String, ResolveError> {
        let response = self.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}
