use chrono::{Local, NaiveDateTime};
use reqwest::Client;
use std::{path::PathBuf, time::Duration};
use tokio::time::sleep;
use tracing::{info, warn};

use crate::{
    error::PipelineError,
    playlist::{Banner, PlaylistAssembler, PlaylistEntry, ResolvedEntry, parse_entries},
    resolver::{
        DEFAULT_REFERER, DEFAULT_RESOLVE_TIMEOUT, DEFAULT_UA, PageResolver, ProxyConfig,
        StreamResolver, create_client,
    },
    source::fetch_playlist,
};

pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/omnixmain/OMNIX-OTT-TV/refs/heads/main/sony_php_links.m3u";
pub const DEFAULT_OUTPUT_PATH: &str = "sony_streams.m3u";
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_SOURCE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub source_url: String,
    pub output_path: PathBuf,
    pub user_agent: String,
    pub referer: String,
    /// Timeout of each intermediary page request.
    pub resolve_timeout: Duration,
    pub source_timeout: Duration,
    /// Pause after every resolution attempt, successful or not.
    pub request_delay: Duration,
    pub banner: Banner,
    pub proxy: Option<ProxyConfig>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            user_agent: DEFAULT_UA.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            resolve_timeout: DEFAULT_RESOLVE_TIMEOUT,
            source_timeout: DEFAULT_SOURCE_TIMEOUT,
            request_delay: DEFAULT_REQUEST_DELAY,
            banner: Banner::default(),
            proxy: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Address lines found in the source playlist.
    pub total: usize,
    pub resolved: usize,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Processed {
    pub total: usize,
    pub resolved: usize,
    pub playlist: String,
}

/// Fetches the source playlist, resolves its entries one after another and
/// writes the rebuilt playlist.
pub struct Pipeline {
    config: PipelineConfig,
    client: Client,
    resolver: Box<dyn PageResolver>,
    assembler: PlaylistAssembler,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
        let client = create_client(config.proxy.clone())?;
        Self::with_client(config, client)
    }

    pub fn with_client(config: PipelineConfig, client: Client) -> Result<Self, PipelineError> {
        let resolver = StreamResolver::new(
            client.clone(),
            &config.user_agent,
            &config.referer,
            config.resolve_timeout,
        )?;
        let assembler = PlaylistAssembler::new(config.banner.clone());

        Ok(Self {
            config,
            client,
            resolver: Box::new(resolver),
            assembler,
        })
    }

    /// Replaces the page resolver.
    pub fn with_resolver(mut self, resolver: impl PageResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Resolves entries in order, dropping the ones without a stream.
    pub async fn resolve_entries(&self, entries: Vec<PlaylistEntry>) -> Vec<ResolvedEntry> {
        let mut resolved = Vec::with_capacity(entries.len());

        for entry in entries {
            info!("Processing channel {}...", entry.index);

            let stream_url = self.resolver.resolve(&entry.source_url).await;
            if stream_url.is_none() {
                warn!("  Failed to extract stream for {}", entry.source_url);
            }
            resolved.extend(entry.into_resolved(stream_url));

            sleep(self.config.request_delay).await;
        }

        resolved
    }

    /// Turns source playlist text into output playlist text.
    pub async fn process(&self, content: &str, generated_at: &NaiveDateTime) -> Processed {
        let entries = parse_entries(content);
        let total = entries.len();
        let resolved = self.resolve_entries(entries).await;

        Processed {
            total,
            resolved: resolved.len(),
            playlist: self.assembler.assemble(&resolved, generated_at),
        }
    }

    pub async fn run(&self) -> Result<RunSummary, PipelineError> {
        let content = fetch_playlist(
            &self.client,
            &self.config.source_url,
            self.config.source_timeout,
        )
        .await?;

        let processed = self
            .process(&content, &Local::now().naive_local())
            .await;

        let path = &self.config.output_path;
        tokio::fs::write(path, &processed.playlist)
            .await
            .map_err(|source| PipelineError::Write {
                path: path.clone(),
                source,
            })?;

        info!(
            resolved = processed.resolved,
            total = processed.total,
            "Saved to {}",
            path.display()
        );

        Ok(RunSummary {
            total: processed.total,
            resolved: processed.resolved,
            output_path: path.clone(),
        })
    }
}
