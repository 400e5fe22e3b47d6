//! Run orchestration and report formatting.
pub mod runner;
pub mod summary;

pub use runner::{Dispatcher, allocate_requests};
pub use summary::format_report;
