use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::resolver::error::ResolveError;

/// Failure to retrieve the source playlist.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("source playlist returned {status} for {url}")]
    Status { status: StatusCode, url: String },
}

/// Errors that abort a whole run. Per-entry failures never end up here.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("failed to fetch source playlist: {0}")]
    SourceFetch(#[from] FetchError),
    #[error("failed to write playlist to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to build http client: {0}")]
    Client(#[from] ResolveError),
}
