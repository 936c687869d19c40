mod client;
pub mod error;
pub mod extract;
pub mod page;
mod stream;

pub use client::{DEFAULT_REFERER, DEFAULT_UA, ProxyConfig, create_client};
pub use extract::{Extraction, Strategy, extract_stream_url};
pub use page::PageClient;
pub use stream::{DEFAULT_RESOLVE_TIMEOUT, StreamResolver};

use async_trait::async_trait;

/// Turns an intermediary page address into a direct stream address.
///
/// Implementations never fail: anything that goes wrong while resolving a
/// single page is reported as `None`.
#[async_trait]
pub trait PageResolver: Send + Sync {
    async fn resolve(&self, page_url: &str) -> Option<String>;
}
