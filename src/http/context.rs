use reqwest::blocking::Client;
use reqwest::redirect;
use tracing::{debug, info};

use crate::domain::run::{RunConfig, SuccessPolicy};
use crate::error::{AppError, AppResult, HttpError};

use super::executor::{RequestOutcome, Session, execute_get};
use super::target::Target;

/// Pooled HTTP session bound to one pre-resolved [`Target`].
///
/// `reqwest::blocking::Client` is `Send + Sync` and shares its connection
/// pool internally, so one context serves every worker thread.
#[derive(Debug)]
pub struct ConnectionContext {
    client: Client,
    target: Target,
    success_policy: SuccessPolicy,
}

impl ConnectionContext {
    /// Parses and resolves the target, then builds the shared client.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is invalid, the host does not resolve, or
    /// the HTTP client cannot be built.
    pub fn open(config: &RunConfig) -> AppResult<Self> {
        let target = Target::parse(&config.target_url, config.allow_http)?;
        let addrs = target.resolve()?;
        debug!("Resolved {} to {:?}", target.host(), addrs);

        let redirect_policy = if config.redirect_limit == 0 {
            redirect::Policy::none()
        } else {
            redirect::Policy::limited(usize::try_from(config.redirect_limit).unwrap_or(10))
        };

        let mut builder = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .redirect(redirect_policy);

        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        // IP literals never hit DNS; only named hosts need pinning.
        if let Some(domain) = target.url().domain() {
            builder = builder.resolve_to_addrs(domain, &addrs);
        }

        let client = builder
            .build()
            .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))?;

        info!("Connection context ready for {}", target);
        Ok(Self {
            client,
            target,
            success_policy: config.success_policy.clone(),
        })
    }

    #[must_use]
    pub const fn target(&self) -> &Target {
        &self.target
    }
}

impl Session for ConnectionContext {
    fn execute(&self) -> RequestOutcome {
        execute_get(&self.client, self.target.url(), &self.success_policy)
    }

    fn close(self) {
        let Self { client, target, .. } = self;
        drop(client);
        debug!("Connection context for {} released", target);
    }
}
