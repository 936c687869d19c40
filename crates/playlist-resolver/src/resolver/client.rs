use reqwest::Client;
use rustls::{ClientConfig, crypto::ring};
use rustls_platform_verifier::BuilderVerifierExt;
use std::{sync::Arc, time::Duration};

use super::error::ResolveError;

pub const DEFAULT_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const DEFAULT_REFERER: &str = "https://allinonereborn.xyz/";

const CLIENT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Builds the client shared by the source fetch and every page request.
///
/// Individual requests override the 30 second client timeout with their own.
pub fn create_client(proxy_config: Option<ProxyConfig>) -> Result<Client, ResolveError> {
    let proxy = proxy_config.map(build_proxy).transpose()?;

    let provider = Arc::new(ring::default_provider());
    let tls_config = ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()?
        .with_platform_verifier()?
        .with_no_client_auth();

    let mut builder = Client::builder()
        .use_preconfigured_tls(tls_config)
        .timeout(CLIENT_TIMEOUT);

    if let Some(proxy) = proxy {
        builder = builder.proxy(proxy);
    }

    Ok(builder.build()?)
}

fn build_proxy(config: ProxyConfig) -> Result<reqwest::Proxy, ResolveError> {
    let mut proxy = reqwest::Proxy::all(&config.url)
        .map_err(|e| ResolveError::InvalidProxy(format!("{}: {e}", config.url)))?;
    if let (Some(username), Some(password)) = (config.username, config.password) {
        proxy = proxy.basic_auth(&username, &password);
    }
    Ok(proxy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_proxy_is_rejected() {
        let result = create_client(Some(ProxyConfig {
            url: "not a proxy url".to_string(),
            username: None,
            password: None,
        }));
        assert!(matches!(result, Err(ResolveError::InvalidProxy(_))));
    }

    #[test]
    fn test_proxy_with_credentials() {
        let proxy = build_proxy(ProxyConfig {
            url: "socks5://127.0.0.1:1080".to_string(),
            username: Some("user".to_string()),
            password: Some("pass".to_string()),
        });
        assert!(proxy.is_ok());
    }
}
