use std::time::Duration;

use crate::args::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, PositiveU64, PositiveUsize};

/// Range of status codes accepted by [`SuccessPolicy::accept_any_2xx`].
const SUCCESS_CLASS: std::ops::Range<u16> = 200..300;

/// Decides which response status codes count as a successful request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessPolicy {
    statuses: Vec<u16>,
    accept_any_2xx: bool,
}

impl SuccessPolicy {
    #[must_use]
    pub const fn new(statuses: Vec<u16>, accept_any_2xx: bool) -> Self {
        Self {
            statuses,
            accept_any_2xx,
        }
    }

    /// Only `200 OK` counts.
    #[must_use]
    pub fn exact_ok() -> Self {
        Self::new(vec![200], false)
    }

    #[must_use]
    pub fn is_success(&self, status: u16) -> bool {
        (self.accept_any_2xx && SUCCESS_CLASS.contains(&status)) || self.statuses.contains(&status)
    }

    #[must_use]
    pub fn statuses(&self) -> &[u16] {
        &self.statuses
    }

    #[must_use]
    pub const fn accept_any_2xx(&self) -> bool {
        self.accept_any_2xx
    }
}

impl Default for SuccessPolicy {
    fn default() -> Self {
        Self::exact_ok()
    }
}

/// Everything the dispatcher needs to execute one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target_url: String,
    pub total_requests: PositiveU64,
    pub worker_count: PositiveUsize,
    pub request_timeout: Duration,
    pub success_policy: SuccessPolicy,
    pub redirect_limit: u32,
    pub allow_http: bool,
    pub use_system_proxy: bool,
    pub user_agent: String,
}

impl RunConfig {
    #[must_use]
    pub fn new(
        target_url: impl Into<String>,
        total_requests: PositiveU64,
        worker_count: PositiveUsize,
    ) -> Self {
        Self {
            target_url: target_url.into(),
            total_requests,
            worker_count,
            request_timeout: DEFAULT_TIMEOUT,
            success_policy: SuccessPolicy::default(),
            redirect_limit: 0,
            allow_http: false,
            use_system_proxy: true,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}
