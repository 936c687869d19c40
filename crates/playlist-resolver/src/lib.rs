//! Rebuilds an M3U playlist whose entries point at intermediary web pages.
//!
//! Each entry's page is fetched and the direct stream address embedded in its
//! script data is scraped out. The resulting playlist only contains the
//! entries that could be resolved, in their original order.

pub mod error;
pub mod pipeline;
pub mod playlist;
pub mod resolver;
pub mod source;

pub use error::{FetchError, PipelineError};
pub use pipeline::{Pipeline, PipelineConfig, Processed, RunSummary};
pub use playlist::{Banner, PlaylistAssembler, PlaylistEntry, ResolvedEntry, parse_entries};
pub use resolver::{PageResolver, ProxyConfig, StreamResolver, create_client, error::ResolveError};
