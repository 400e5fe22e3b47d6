mod allocation;
mod worker;


use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, ScopedJoinHandle};

use tracing::{error, info, warn};

use crate::domain::run::RunConfig;
use crate::error::AppResult;
use crate::http::{ConnectionContext, Session};
use crate::metrics::RunMetrics;
use crate::system::{ProcessSampler, ResourceSampler};

pub use allocation::allocate_requests;
use worker::run_worker;

/// Owns one run: allocation, worker threads, the success counter and the
/// before/after resource samples.
#[derive(Debug)]
pub struct Dispatcher<R = ProcessSampler> {
    config: RunConfig,
    sampler: R,
}

impl Dispatcher<ProcessSampler> {
    #[must_use]
    pub const fn new(config: RunConfig) -> Self {
        Self::with_sampler(config, ProcessSampler)
    }
}

impl<R> Dispatcher<R>
where
    R: ResourceSampler,
{
    #[must_use]
    pub const fn with_sampler(config: RunConfig, sampler: R) -> Self {
        Self { config, sampler }
    }

    #[must_use]
    pub const fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Opens the connection context and runs the configured workload against it.
    ///
    /// # Errors
    ///
    /// Returns an error when the connection context cannot be opened; no
    /// worker is started in that case.
    pub fn run(&self) -> AppResult<RunMetrics> {
        let context = ConnectionContext::open(&self.config)?;
        Ok(self.run_with(context))
    }

    /// Runs the workload over `session` and releases it after every worker
    /// has been joined.
    pub fn run_with<S>(&self, session: S) -> RunMetrics
    where
        S: Session,
    {
        self.run_on(session, &OsThreadSpawner)
    }

    fn run_on<S, W>(&self, session: S, spawner: &W) -> RunMetrics
    where
        S: Session,
        W: WorkerSpawner,
    {
        let total = self.config.total_requests.get();
        let workers = self.config.worker_count.get();
        if u64::try_from(workers).map_or(true, |count| count > total) {
            warn!(
                "{} workers for {} requests; some workers will have nothing to do.",
                workers, total
            );
        }

        let allocation = allocate_requests(total, workers);
        let success_counter = AtomicU64::new(0);

        self.sampler.reset_baseline();
        let before = self.sampler.sample();
        info!("Dispatching {} requests across {} workers", total, workers);

        let dispatched = spawn_and_join(spawner, &session, &allocation, &success_counter);

        let after = self.sampler.sample();
        session.close();

        let successful = success_counter.load(Ordering::Acquire);
        RunMetrics::from_samples(dispatched, successful, &before, &after)
    }
}

/// Starts worker threads inside a scope.
trait WorkerSpawner {
    fn spawn<'scope, 'env: 'scope, F>(
        &self,
        scope: &'scope thread::Scope<'scope, 'env>,
        index: usize,
        body: F,
    ) -> io::Result<ScopedJoinHandle<'scope, ()>>
    where
        F: FnOnce() + Send + 'scope;
}

/// Named OS threads (`worker-<n>`).
struct OsThreadSpawner;

impl WorkerSpawner for OsThreadSpawner {
    fn spawn<'scope, 'env: 'scope, F>(
        &self,
        scope: &'scope thread::Scope<'scope, 'env>,
        index: usize,
        body: F,
    ) -> io::Result<ScopedJoinHandle<'scope, ()>>
    where
        F: FnOnce() + Send + 'scope,
    {
        thread::Builder::new()
            .name(format!("worker-{}", index))
            .spawn_scoped(scope, body)
    }
}

/// Spawns one thread per allocation entry and joins all of them.
/// Returns the number of requests owned by workers that actually started.
fn spawn_and_join<S, W>(
    spawner: &W,
    session: &S,
    allocation: &[u64],
    success_counter: &AtomicU64,
) -> u64
where
    S: Session,
    W: WorkerSpawner,
{
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(allocation.len());
        let mut dispatched: u64 = 0;

        for (index, &count) in allocation.iter().enumerate() {
            let spawned = spawner.spawn(scope, index, move || {
                run_worker(session, count, success_counter);
            });
            match spawned {
                Ok(handle) => {
                    dispatched = dispatched.saturating_add(count);
                    handles.push((index, handle));
                }
                Err(err) => {
                    warn!(
                        "Failed to spawn worker {}: {}. Continuing without its {} requests.",
                        index, err, count
                    );
                }
            }
        }

        for (index, handle) in handles {
            if handle.join().is_err() {
                error!("Worker {} panicked; its remaining requests count as failed.", index);
            }
        }

        dispatched
    })
}
