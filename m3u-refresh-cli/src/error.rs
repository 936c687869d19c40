use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0:#}")]
    Config(#[from] anyhow::Error),

    #[error(transparent)]
    Pipeline(#[from] playlist_resolver::PipelineError),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, CliError>;
