use reqwest::Url;
use reqwest::blocking::Client;
use tracing::{debug, trace};

use crate::domain::run::SuccessPolicy;

/// Result of one request/response cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOutcome {
    pub status: Option<u16>,
    pub success: bool,
    pub timed_out: bool,
    pub transport_error: bool,
}

impl RequestOutcome {
    #[must_use]
    pub const fn completed(status: u16, success: bool) -> Self {
        Self {
            status: Some(status),
            success,
            timed_out: false,
            transport_error: false,
        }
    }

    #[must_use]
    pub const fn failed(timed_out: bool) -> Self {
        Self {
            status: None,
            success: false,
            timed_out,
            transport_error: !timed_out,
        }
    }
}

/// A transport shared read-only by every worker of a run.
///
/// `execute` is called concurrently from worker threads; `close` consumes the
/// session and runs once after all workers have been joined.
pub trait Session: Sync {
    fn execute(&self) -> RequestOutcome;

    fn close(self)
    where
        Self: Sized;
}

/// Issues one GET and classifies it. The response is drained so the pooled
/// connection can be reused, and dropped before returning on every path.
pub(super) fn execute_get(client: &Client, url: &Url, policy: &SuccessPolicy) -> RequestOutcome {
    let mut response = match client.get(url.clone()).send() {
        Ok(response) => response,
        Err(err) => {
            debug!("Request failed: {}", err);
            return RequestOutcome::failed(err.is_timeout());
        }
    };

    let status = response.status().as_u16();
    match std::io::copy(&mut response, &mut std::io::sink()) {
        Ok(bytes) => {
            let success = policy.is_success(status);
            if !success {
                trace!(status, bytes, "Unexpected status");
            }
            RequestOutcome::completed(status, success)
        }
        Err(err) => {
            debug!("Failed to read response body: {}", err);
            let timed_out = err.kind() == std::io::ErrorKind::TimedOut;
            RequestOutcome {
                status: Some(status),
                success: false,
                timed_out,
                transport_error: !timed_out,
            }
        }
    }
}
