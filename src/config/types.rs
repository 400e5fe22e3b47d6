use std::time::Duration;

use serde::Deserialize;

use crate::args::OutputFormat;
use crate::args::parsers::parse_duration_arg;
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub requests: Option<u64>,
    #[serde(alias = "concurrency", alias = "threads")]
    pub workers: Option<usize>,
    pub timeout: Option<DurationValue>,
    pub status: Option<StatusValue>,
    #[serde(alias = "accept-2xx")]
    pub accept_2xx: Option<bool>,
    pub redirect: Option<u32>,
    #[serde(alias = "allow-http")]
    pub allow_http: Option<bool>,
    #[serde(alias = "no-proxy")]
    pub no_proxy: Option<bool>,
    pub output_format: Option<OutputFormat>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StatusValue {
    Single(u16),
    List(Vec<u16>),
}

impl StatusValue {
    pub(crate) fn to_codes(&self) -> Vec<u16> {
        match self {
            StatusValue::Single(code) => vec![*code],
            StatusValue::List(codes) => codes.clone(),
        }
    }
}
