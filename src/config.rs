use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_POLL_SECS: u64 = 30;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_FILE: &str = "spending-dashboard.log";

/// Terminal spending dashboard. Every flag can also come from the environment
/// (or a `.env` file).
#[derive(Debug, Clone, Parser)]
#[command(name = "spending-dashboard", version, about)]
pub struct Cli {
    /// Base URL of the finance API
    #[arg(long, env = "DASHBOARD_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Seconds between polls
    #[arg(
        long,
        env = "DASHBOARD_POLL_SECS",
        default_value_t = DEFAULT_POLL_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub poll_secs: u64,

    /// Per-request timeout in seconds
    #[arg(
        long,
        env = "DASHBOARD_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Where logs go while the terminal UI is up
    #[arg(long, env = "DASHBOARD_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Fetch once, print the data as text and exit
    #[arg(long)]
    pub once: bool,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base_url: String,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_SECS),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Self {
            api_base_url: cli.api_base_url.clone(),
            poll_interval: Duration::from_secs(cli.poll_secs),
            request_timeout: Duration::from_secs(cli.timeout_secs),
            log_file: cli.log_file.clone(),
        }
    }
}
