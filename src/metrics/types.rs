use std::time::Duration;

use crate::system::ResourceSample;

/// Requests per second are kept as fixed point with six decimals.
const THROUGHPUT_SCALE: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunMetrics {
    pub total_requests: u64,
    pub successful: u64,
    pub failed: u64,
    pub wall_time: Duration,
    pub cpu_time: Duration,
    pub peak_memory_bytes: u64,
    pub throughput_rps_x1e6: u64,
}

impl RunMetrics {
    /// `failed` and throughput are derived here and nowhere else.
    #[must_use]
    pub fn new(
        total_requests: u64,
        successful: u64,
        wall_time: Duration,
        cpu_time: Duration,
        peak_memory_bytes: u64,
    ) -> Self {
        let successful = successful.min(total_requests);
        Self {
            total_requests,
            successful,
            failed: total_requests.saturating_sub(successful),
            wall_time,
            cpu_time,
            peak_memory_bytes,
            throughput_rps_x1e6: throughput_x1e6(total_requests, wall_time),
        }
    }

    #[must_use]
    pub fn from_samples(
        total_requests: u64,
        successful: u64,
        before: &ResourceSample,
        after: &ResourceSample,
    ) -> Self {
        Self::new(
            total_requests,
            successful,
            after.at.saturating_duration_since(before.at),
            after.cpu_time.saturating_sub(before.cpu_time),
            before.peak_memory_bytes.max(after.peak_memory_bytes),
        )
    }
}

fn throughput_x1e6(total_requests: u64, wall_time: Duration) -> u64 {
    let nanos = wall_time.as_nanos();
    if nanos == 0 {
        return 0;
    }
    let scaled = u128::from(total_requests)
        .saturating_mul(THROUGHPUT_SCALE)
        .saturating_mul(NANOS_PER_SEC)
        .checked_div(nanos)
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}
