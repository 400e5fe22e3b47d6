//! Core library for the `loadgauge` CLI.
//!
//! `loadgauge` fires a fixed number of HTTP GET requests at one target from a
//! fixed pool of worker threads and reports how many succeeded, together with
//! wall-clock time, process CPU time, peak memory and throughput. The modules
//! here are the building blocks of that binary: argument and config parsing,
//! the shared connection context, the dispatcher and the reporter.
pub mod adapters;
pub mod app;
pub mod args;
pub mod config;
pub mod domain;
pub mod entry;
pub mod error;
pub mod http;
pub mod metrics;
pub mod system;
