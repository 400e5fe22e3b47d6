use std::time::Duration;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("loadgauge/", env!("CARGO_PKG_VERSION"));

pub(crate) const DEFAULT_TARGET_URL: &str = "https://jsonplaceholder.typicode.com/posts/1";

/// Applied to connect and to the whole send/receive cycle.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
