pub(crate) mod logger;
pub mod sampler;

pub use sampler::{ProcessSampler, ResourceSample, ResourceSampler};
