use clap::Parser;
use std::path::PathBuf;

/// Every option is optional; without any the built-in defaults are used.
#[derive(Parser, Debug, Default)]
#[command(
    name = "m3u-refresh",
    about = "Rebuilds an M3U playlist by resolving each intermediary page to its direct stream address",
    version,
    author
)]
pub struct Args {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Source playlist URL
    #[arg(short, long)]
    pub source: Option<String>,

    /// Output playlist path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Referer sent with every page request
    #[arg(long)]
    pub referer: Option<String>,

    /// User agent sent with every page request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Pause after each page request in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Page request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Source playlist request timeout in seconds
    #[arg(long)]
    pub source_timeout: Option<u64>,

    /// Proxy URL (supports http, https, socks5)
    #[arg(long)]
    pub proxy: Option<String>,

    /// Proxy username (if proxy requires authentication)
    #[arg(long)]
    pub proxy_username: Option<String>,

    /// Proxy password (if proxy requires authentication)
    #[arg(long)]
    pub proxy_password: Option<String>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,
}
