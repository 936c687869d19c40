use anyhow::{Context, Result, bail};
use playlist_resolver::{
    Banner, PipelineConfig, ProxyConfig,
    pipeline::{DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_URL},
    resolver::{DEFAULT_REFERER, DEFAULT_UA},
};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use url::Url;

use crate::cli::Args;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Playlist whose entries point at intermediary pages
    pub source_url: String,

    /// Where the rebuilt playlist is written
    pub output_path: PathBuf,

    /// User agent string for page requests
    pub user_agent: String,

    /// Referer header for page requests
    pub referer: String,

    /// Page request timeout in seconds
    pub timeout: u64,

    /// Source playlist request timeout in seconds
    pub source_timeout: u64,

    /// Pause after each page request in milliseconds
    pub delay_ms: u64,

    /// Banner lines above the timestamp
    pub attribution: Vec<String>,

    /// Banner lines below the timestamp
    pub disclaimer: Vec<String>,

    /// Proxy URL (supports http, https, socks5)
    pub proxy: Option<String>,

    pub proxy_username: Option<String>,

    pub proxy_password: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let banner = Banner::default();
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            user_agent: DEFAULT_UA.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            timeout: 10,
            source_timeout: 30,
            delay_ms: 500,
            attribution: banner.attribution,
            disclaimer: banner.disclaimer,
            proxy: None,
            proxy_username: None,
            proxy_password: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults when no
    /// file is given.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(path).with_context(|| {
                    format!("Failed to read configuration file {}", path.display())
                })?;
                toml::from_str(&content).context("Failed to parse configuration file")
            }
            None => Ok(Self::default()),
        }
    }

    /// Command line flags take precedence over the file.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(source) = &args.source {
            self.source_url = source.clone();
        }
        if let Some(output) = &args.output {
            self.output_path = output.clone();
        }
        if let Some(referer) = &args.referer {
            self.referer = referer.clone();
        }
        if let Some(user_agent) = &args.user_agent {
            self.user_agent = user_agent.clone();
        }
        if let Some(delay_ms) = args.delay_ms {
            self.delay_ms = delay_ms;
        }
        if let Some(timeout) = args.timeout {
            self.timeout = timeout;
        }
        if let Some(source_timeout) = args.source_timeout {
            self.source_timeout = source_timeout;
        }
        if args.proxy.is_some() {
            self.proxy = args.proxy.clone();
        }
        if args.proxy_username.is_some() {
            self.proxy_username = args.proxy_username.clone();
        }
        if args.proxy_password.is_some() {
            self.proxy_password = args.proxy_password.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.source_url)
            .with_context(|| format!("Invalid source URL '{}'", self.source_url))?;
        if self.timeout == 0 {
            bail!("Page request timeout must be at least one second");
        }
        if self.source_timeout == 0 {
            bail!("Source request timeout must be at least one second");
        }
        Ok(())
    }

    /// Show current configuration as a formatted string
    pub fn show(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration for display")
    }

    pub fn into_pipeline_config(self) -> PipelineConfig {
        let proxy = self.proxy.map(|url| ProxyConfig {
            url,
            username: self.proxy_username,
            password: self.proxy_password,
        });

        PipelineConfig {
            source_url: self.source_url,
            output_path: self.output_path,
            user_agent: self.user_agent,
            referer: self.referer,
            resolve_timeout: Duration::from_secs(self.timeout),
            source_timeout: Duration::from_secs(self.source_timeout),
            request_delay: Duration::from_millis(self.delay_ms),
            banner: Banner {
                attribution: self.attribution,
                disclaimer: self.disclaimer,
            },
            proxy,
        }
    }
}
