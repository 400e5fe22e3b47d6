use super::parsers::{
    parse_bool_env, parse_duration_arg, parse_status_code, validate_status_code,
};
use super::*;
use crate::error::{AppError, AppResult, ValidationError};
use std::time::Duration;

fn expect(condition: bool, message: &'static str) -> AppResult<()> {
    if condition {
        Ok(())
    } else {
        Err(AppError::validation(message))
    }
}

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["loadgauge"])?;

    let expected_no_color = std::env::var("NO_COLOR")
        .ok()
        .and_then(|value| parse_bool_env(&value).ok())
        .unwrap_or(false);

    let checks = [
        (
            std::env::var_os("LOADGAUGE_URL").is_some() || args.url == DEFAULT_TARGET_URL,
            "Unexpected url",
        ),
        (
            std::env::var_os("LOADGAUGE_REQUESTS").is_some() || args.requests.get() == 1000,
            "Unexpected requests",
        ),
        (
            std::env::var_os("LOADGAUGE_WORKERS").is_some() || args.workers.get() == 8,
            "Unexpected workers",
        ),
        (
            args.request_timeout == DEFAULT_TIMEOUT,
            "Unexpected request_timeout",
        ),
        (
            args.expected_status_codes == vec![200],
            "Unexpected expected_status_codes",
        ),
        (!args.accept_2xx, "Expected accept_2xx to be false"),
        (args.redirect_limit == 0, "Unexpected redirect_limit"),
        (!args.allow_http, "Expected allow_http to be false"),
        (!args.no_proxy, "Expected no_proxy to be false"),
        (
            args.output_format == OutputFormat::Text,
            "Expected text output",
        ),
        (args.config.is_none(), "Expected config to be None"),
        (!args.verbose, "Expected verbose to be false"),
        (args.no_color == expected_no_color, "Unexpected no_color"),
    ];

    for (condition, message) in checks {
        expect(condition, message)?;
    }
    Ok(())
}

#[test]
fn parse_args_overrides() -> AppResult<()> {
    let args = parse_test_args([
        "loadgauge",
        "-u",
        "http://127.0.0.1:8080/health",
        "-n",
        "17",
        "-c",
        "5",
        "--timeout",
        "250ms",
        "-s",
        "200",
        "-s",
        "204",
        "--accept-2xx",
        "--redirect",
        "3",
        "--allow-http",
        "-o",
        "json",
        "-v",
    ])?;

    let checks = [
        (
            args.url == "http://127.0.0.1:8080/health",
            "Unexpected url",
        ),
        (args.requests.get() == 17, "Unexpected requests"),
        (args.workers.get() == 5, "Unexpected workers"),
        (
            args.request_timeout == Duration::from_millis(250),
            "Unexpected request_timeout",
        ),
        (
            args.expected_status_codes == vec![200, 204],
            "Unexpected expected_status_codes",
        ),
        (args.accept_2xx, "Expected accept_2xx"),
        (args.redirect_limit == 3, "Unexpected redirect_limit"),
        (args.allow_http, "Expected allow_http"),
        (
            args.output_format == OutputFormat::Json,
            "Expected json output",
        ),
        (args.verbose, "Expected verbose"),
    ];

    for (condition, message) in checks {
        expect(condition, message)?;
    }
    Ok(())
}

#[test]
fn concurrency_alias_sets_workers() -> AppResult<()> {
    let args = parse_test_args(["loadgauge", "--concurrency", "3"])?;
    expect(args.workers.get() == 3, "Unexpected workers")
}

#[test]
fn zero_requests_rejected() -> AppResult<()> {
    let result = parse_test_args(["loadgauge", "-n", "0"]);
    expect(result.is_err(), "Expected zero requests to be rejected")
}

#[test]
fn zero_workers_rejected() -> AppResult<()> {
    let result = parse_test_args(["loadgauge", "-c", "0"]);
    expect(result.is_err(), "Expected zero workers to be rejected")
}

#[test]
fn out_of_range_status_rejected() -> AppResult<()> {
    let result = parse_test_args(["loadgauge", "-s", "42"]);
    expect(result.is_err(), "Expected status 42 to be rejected")
}

#[test]
fn parse_duration_units() -> AppResult<()> {
    let cases = [
        ("10", Duration::from_secs(10)),
        ("750ms", Duration::from_millis(750)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_arg(input)?;
        expect(parsed == expected, input)?;
    }
    Ok(())
}

#[test]
fn parse_duration_rejects_invalid() -> AppResult<()> {
    let checks = [
        (
            matches!(parse_duration_arg(""), Err(ValidationError::DurationEmpty)),
            "Expected empty duration error",
        ),
        (
            matches!(
                parse_duration_arg("fast"),
                Err(ValidationError::InvalidDurationFormat { .. })
            ),
            "Expected format error",
        ),
        (
            matches!(
                parse_duration_arg("5d"),
                Err(ValidationError::InvalidDurationUnit { .. })
            ),
            "Expected unit error",
        ),
        (
            matches!(parse_duration_arg("0ms"), Err(ValidationError::DurationZero)),
            "Expected zero duration error",
        ),
    ];
    for (condition, message) in checks {
        expect(condition, message)?;
    }
    Ok(())
}

#[test]
fn parse_status_code_bounds() -> AppResult<()> {
    expect(parse_status_code("100").is_ok(), "Expected 100 to parse")?;
    expect(parse_status_code(" 599 ").is_ok(), "Expected 599 to parse")?;
    expect(parse_status_code("600").is_err(), "Expected 600 to fail")?;
    expect(parse_status_code("ok").is_err(), "Expected text to fail")
}

#[test]
fn validate_status_code_bounds() -> AppResult<()> {
    expect(validate_status_code(100).is_ok(), "Expected 100 to be valid")?;
    expect(validate_status_code(599).is_ok(), "Expected 599 to be valid")?;
    expect(validate_status_code(99).is_err(), "Expected 99 to be invalid")?;
    expect(
        matches!(
            validate_status_code(600),
            Err(ValidationError::InvalidStatusCode { ref value }) if value == "600"
        ),
        "Expected 600 to be reported as an invalid status code",
    )
}

#[test]
fn parse_bool_env_values() -> AppResult<()> {
    expect(parse_bool_env("YES")?, "Expected YES to be true")?;
    expect(!parse_bool_env("off")?, "Expected off to be false")?;
    expect(parse_bool_env("maybe").is_err(), "Expected maybe to fail")
}
