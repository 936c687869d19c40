use reqwest::Client;
use std::time::Duration;
use tracing::info;

use crate::error::FetchError;

/// Downloads the source playlist as text.
pub async fn fetch_playlist(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<String, FetchError> {
    info!("Fetching source M3U from {url}...");

    let response = client.get(url).timeout(timeout).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status,
            url: url.to_string(),
        });
    }

    Ok(response.text().await?)
}
