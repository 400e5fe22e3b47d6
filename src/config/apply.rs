use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{PositiveU64, PositiveUsize, TesterArgs};
use crate::args::parsers::validate_status_code;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Values given on the
/// command line or through an environment variable are kept.
///
/// # Errors
///
/// Returns an error when a config value is out of range.
pub fn apply_config(
    args: &mut TesterArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = url;
    }

    if !is_cli(matches, "requests")
        && let Some(requests) = config.requests
    {
        args.requests = PositiveU64::try_from(requests).map_err(|err| {
            AppError::config(ConfigError::FieldMustBePositive {
                field: "requests",
                source: err,
            })
        })?;
    }

    if !is_cli(matches, "workers")
        && let Some(workers) = config.workers
    {
        args.workers = PositiveUsize::try_from(workers).map_err(|err| {
            AppError::config(ConfigError::FieldMustBePositive {
                field: "workers",
                source: err,
            })
        })?;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = timeout.to_duration().map_err(|err| {
            AppError::config(ConfigError::InvalidDuration {
                field: "timeout",
                source: err,
            })
        })?;
    }

    if !is_cli(matches, "expected_status_codes")
        && let Some(status) = config.status.as_ref()
    {
        let codes = status.to_codes();
        if codes.is_empty() {
            return Err(AppError::config(ConfigError::EmptyStatusList));
        }
        for code in &codes {
            validate_status_code(*code)?;
        }
        args.expected_status_codes = codes;
    }

    if !is_cli(matches, "accept_2xx")
        && let Some(accept) = config.accept_2xx
    {
        args.accept_2xx = accept;
    }

    if !is_cli(matches, "redirect_limit")
        && let Some(limit) = config.redirect
    {
        args.redirect_limit = limit;
    }

    if !is_cli(matches, "allow_http")
        && let Some(allow) = config.allow_http
    {
        args.allow_http = allow;
    }

    if !is_cli(matches, "no_proxy")
        && let Some(no_proxy) = config.no_proxy
    {
        args.no_proxy = no_proxy;
    }

    if !is_cli(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}
