use crate::args::{DEFAULT_USER_AGENT, TesterArgs};
use crate::domain::run::{RunConfig, SuccessPolicy};

/// Maps parsed (and config-merged) CLI arguments onto the run description.
#[must_use]
pub fn to_run_config(args: &TesterArgs) -> RunConfig {
    RunConfig {
        target_url: args.url.clone(),
        total_requests: args.requests,
        worker_count: args.workers,
        request_timeout: args.request_timeout,
        success_policy: SuccessPolicy::new(args.expected_status_codes.clone(), args.accept_2xx),
        redirect_limit: args.redirect_limit,
        allow_http: args.allow_http,
        use_system_proxy: !args.no_proxy,
        user_agent: DEFAULT_USER_AGENT.to_owned(),
    }
}
