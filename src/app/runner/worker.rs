use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::http::Session;

/// Executes exactly `count` requests, bumping `success_counter` once per success.
/// There is no early exit: an unreachable target simply yields no successes.
pub(super) fn run_worker<S>(session: &S, count: u64, success_counter: &AtomicU64)
where
    S: Session,
{
    let mut local_successes: u64 = 0;
    for _ in 0..count {
        if session.execute().success {
            success_counter.fetch_add(1, Ordering::Relaxed);
            local_successes = local_successes.saturating_add(1);
        }
    }
    let thread = std::thread::current();
    debug!(
        "{} finished: {}/{} successful",
        thread.name().unwrap_or("worker"),
        local_successes,
        count
    );
}
