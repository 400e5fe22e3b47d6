use std::fmt::Write as _;
use std::time::Duration;

use serde::Serialize;

use crate::args::OutputFormat;
use crate::error::{AppResult, MetricsError};
use crate::metrics::RunMetrics;

const MICROS_PER_UNIT: u64 = 1_000_000;
const BYTES_PER_MB: u128 = 1_048_576;

#[derive(Debug, Serialize)]
struct JsonReport {
    total_requests: u64,
    successful_requests: u64,
    failed_requests: u64,
    wall_time_us: u64,
    cpu_time_us: u64,
    peak_memory_bytes: u64,
    throughput_rps_x1e6: u64,
}

impl From<&RunMetrics> for JsonReport {
    fn from(metrics: &RunMetrics) -> Self {
        Self {
            total_requests: metrics.total_requests,
            successful_requests: metrics.successful,
            failed_requests: metrics.failed,
            wall_time_us: duration_micros(metrics.wall_time),
            cpu_time_us: duration_micros(metrics.cpu_time),
            peak_memory_bytes: metrics.peak_memory_bytes,
            throughput_rps_x1e6: metrics.throughput_rps_x1e6,
        }
    }
}

/// Renders the final report. Printing is left to the caller.
///
/// # Errors
///
/// Returns an error if the report cannot be written or serialized.
pub fn format_report(metrics: &RunMetrics, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => format_text(metrics),
        OutputFormat::Json => {
            let report = JsonReport::from(metrics);
            serde_json::to_string_pretty(&report)
                .map_err(|source| MetricsError::SerializeReport { source }.into())
        }
    }
}

fn format_text(metrics: &RunMetrics) -> AppResult<String> {
    let mut out = String::new();
    write_text(&mut out, metrics).map_err(|source| MetricsError::WriteLine { source })?;
    Ok(out)
}

fn write_text(out: &mut String, metrics: &RunMetrics) -> std::fmt::Result {
    writeln!(out, "--- Load Test Report ---")?;
    writeln!(out, "Total requests      : {}", metrics.total_requests)?;
    writeln!(out, "Successful requests : {}", metrics.successful)?;
    writeln!(out, "Failed requests     : {}", metrics.failed)?;
    writeln!(
        out,
        "Wall-clock time     : {} seconds",
        fixed6(duration_micros(metrics.wall_time))
    )?;
    writeln!(
        out,
        "CPU time            : {} seconds",
        fixed6(duration_micros(metrics.cpu_time))
    )?;
    writeln!(
        out,
        "Max memory          : {} MB",
        fixed6(megabytes_x1e6(metrics.peak_memory_bytes))
    )?;
    write!(
        out,
        "Throughput          : {} requests/second",
        fixed6(metrics.throughput_rps_x1e6)
    )
}

fn duration_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

fn megabytes_x1e6(bytes: u64) -> u64 {
    let scaled = u128::from(bytes)
        .saturating_mul(u128::from(MICROS_PER_UNIT))
        .checked_div(BYTES_PER_MB)
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

/// Formats a value scaled by 1e6 with six decimal places.
fn fixed6(scaled: u64) -> String {
    format!(
        "{}.{:06}",
        scaled.checked_div(MICROS_PER_UNIT).unwrap_or(0),
        scaled.checked_rem(MICROS_PER_UNIT).unwrap_or(0)
    )
}
