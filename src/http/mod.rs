//! Target parsing, the shared connection context and single-request execution.
mod context;
mod executor;
mod target;

#[cfg(test)]
pub(crate) mod test_server;

pub use context::ConnectionContext;
pub use executor::{RequestOutcome, Session};
pub use target::{Scheme, Target};
