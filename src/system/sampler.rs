//! Wall-clock, CPU time and memory sampling behind a small capability trait.
use std::time::{Duration, Instant};

/// One point-in-time reading of the process.
#[derive(Debug, Clone, Copy)]
pub struct ResourceSample {
    pub at: Instant,
    pub cpu_time: Duration,
    pub peak_memory_bytes: u64,
}

pub trait ResourceSampler {
    /// Releases reclaimable memory so the next sample starts from a trimmed baseline.
    fn reset_baseline(&self) {}

    fn sample(&self) -> ResourceSample;
}

/// Samples the current process through the platform's native counters.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessSampler;

impl ResourceSampler for ProcessSampler {
    fn reset_baseline(&self) {
        trim_heap();
    }

    fn sample(&self) -> ResourceSample {
        let usage = read_rusage();
        let peak_memory_bytes = usage
            .and_then(|usage| usage.max_rss_bytes)
            .or_else(read_rss_bytes)
            .unwrap_or(0);
        ResourceSample {
            at: Instant::now(),
            cpu_time: usage.map_or(Duration::ZERO, |usage| usage.cpu_time),
            peak_memory_bytes,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Rusage {
    cpu_time: Duration,
    max_rss_bytes: Option<u64>,
}

#[cfg(unix)]
fn read_rusage() -> Option<Rusage> {
    let mut usage = std::mem::MaybeUninit::<libc::rusage>::zeroed();
    // Safety: getrusage writes a full rusage struct into the provided pointer.
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
    if rc != 0 {
        return None;
    }
    // Safety: getrusage returned 0, so the struct is initialised.
    let usage = unsafe { usage.assume_init() };
    let cpu_time = timeval_to_duration(usage.ru_utime)
        .saturating_add(timeval_to_duration(usage.ru_stime));
    Some(Rusage {
        cpu_time,
        max_rss_bytes: max_rss_bytes(usage.ru_maxrss),
    })
}

#[cfg(not(unix))]
fn read_rusage() -> Option<Rusage> {
    None
}

#[cfg(unix)]
fn timeval_to_duration(value: libc::timeval) -> Duration {
    let secs = u64::try_from(value.tv_sec).unwrap_or(0);
    let micros = u32::try_from(value.tv_usec).unwrap_or(0);
    Duration::from_secs(secs).saturating_add(Duration::from_micros(u64::from(micros)))
}

/// `ru_maxrss` is reported in bytes on macOS and in KiB elsewhere.
#[cfg(unix)]
fn max_rss_bytes(raw: libc::c_long) -> Option<u64> {
    let value = u64::try_from(raw).ok().filter(|value| *value > 0)?;
    if cfg!(target_os = "macos") {
        Some(value)
    } else {
        Some(value.saturating_mul(1024))
    }
}

fn read_rss_bytes() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        let statm = std::fs::read_to_string("/proc/self/statm").ok()?;
        let mut parts = statm.split_whitespace();
        let _size = parts.next()?;
        let resident = parts.next()?.parse::<u64>().ok()?;
        // Safety: sysconf is safe to call; we only read the page size.
        let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
        if page_size <= 0 {
            return None;
        }
        let page_size = u64::try_from(page_size).ok()?;
        Some(resident.saturating_mul(page_size))
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

fn trim_heap() {
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    {
        // Safety: malloc_trim only returns free heap pages to the OS.
        let _released = unsafe { libc::malloc_trim(0) };
    }
}
