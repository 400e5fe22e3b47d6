use clap::Parser;
use std::time::Duration;

use super::DEFAULT_TARGET_URL;
use super::parsers::{
    parse_bool_env, parse_duration_arg, parse_positive_u64, parse_positive_usize,
    parse_status_code,
};
use super::types::{OutputFormat, PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fixed-concurrency HTTP load harness: splits a bounded number of GET requests across worker threads and reports throughput, CPU time and peak memory."
)]
pub struct TesterArgs {
    /// Target URL (https, or http with --allow-http)
    #[arg(long, short, env = "LOADGAUGE_URL", default_value = DEFAULT_TARGET_URL)]
    pub url: String,

    /// Total number of requests, split across workers
    #[arg(
        long = "requests",
        short = 'n',
        env = "LOADGAUGE_REQUESTS",
        default_value = "1000",
        value_parser = parse_positive_u64
    )]
    pub requests: PositiveU64,

    /// Number of worker threads
    #[arg(
        long = "workers",
        short = 'c',
        alias = "concurrency",
        env = "LOADGAUGE_WORKERS",
        default_value = "8",
        value_parser = parse_positive_usize
    )]
    pub workers: PositiveUsize,

    /// Per-request timeout for connect and send/receive (supports ms/s/m/h)
    #[arg(long = "timeout", default_value = "5s", value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Status code counted as success (repeatable)
    #[arg(long = "status", short = 's', default_value = "200", value_parser = parse_status_code)]
    pub expected_status_codes: Vec<u16>,

    /// Count any 2xx status as success
    #[arg(long = "accept-2xx")]
    pub accept_2xx: bool,

    /// Number of redirects to follow (0 reports 3xx responses as-is)
    #[arg(long = "redirect", default_value = "0")]
    pub redirect_limit: u32,

    /// Permit plain http:// targets
    #[arg(long = "allow-http")]
    pub allow_http: bool,

    /// Ignore HTTP(S)_PROXY environment settings
    #[arg(long = "no-proxy")]
    pub no_proxy: bool,

    /// Report format
    #[arg(long = "output-format", short = 'o', default_value = "text", ignore_case = true)]
    pub output_format: OutputFormat,

    /// Path to config file (TOML/JSON). Defaults to ./loadgauge.toml or ./loadgauge.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by LOADGAUGE_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
