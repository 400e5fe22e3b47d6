//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use cli::TesterArgs;
pub use types::{OutputFormat, PositiveU64, PositiveUsize};

pub(crate) use defaults::{DEFAULT_TARGET_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
#[cfg(test)]
pub(crate) use test_support::parse_test_args;
