//! Command-line arguments for the router summary binary

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::feed::DEFAULT_TICK_INTERVAL_MS;
use crate::types::{ConfigPath, RouterName};

/// Live retry budget summary for one router
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Router label to summarize
    #[arg(short, long, env = "ROUTER_SUMMARY_ROUTER")]
    pub router: RouterName,

    /// Router configuration file (`.json`, otherwise TOML)
    #[arg(short, long, env = "ROUTER_SUMMARY_CONFIG")]
    pub config: Option<ConfigPath>,

    /// Newline-delimited JSON snapshots, `-` for stdin
    #[arg(short, long, default_value = "-", env = "ROUTER_SUMMARY_SNAPSHOTS")]
    pub snapshots: PathBuf,

    /// Milliseconds between published snapshots
    #[arg(
        long,
        default_value_t = DEFAULT_TICK_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(1..),
        env = "ROUTER_SUMMARY_INTERVAL_MS"
    )]
    pub interval_ms: u64,

    /// Print to stdout instead of drawing the dashboard
    #[arg(long, env = "ROUTER_SUMMARY_HEADLESS")]
    pub headless: bool,
}

impl Args {
    /// Tick interval
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
