use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid proxy: {0}")]
    InvalidProxy(String),
    #[error("invalid header value: {0}")]
    InvalidHeader(String),
    #[error("http error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("page returned {status} for {url}")]
    Status { status: StatusCode, url: String },
    #[error("no stream found in {url}")]
    NoStreamFound { url: String },
    #[error("tls error: {0}")]
    Tls(#[from] rustls::Error),
}

impl ResolveError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::HttpError(e) if e.is_timeout())
    }
}
