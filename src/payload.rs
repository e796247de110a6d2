use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::config::Config;

/// The application record sent to the endpoint.
///
/// Fields are declared in ascending key order, which is the order serde
/// emits them in. With compact output the serialized body is canonical,
/// so the receiver can recompute the signature.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Submission {
    pub action_run_link: String,
    pub email: String,
    pub name: String,
    pub repository_link: String,
    pub resume_link: String,
    pub timestamp: String,
}

impl Submission {
    pub fn new(config: &Config, at: DateTime<Utc>) -> Self {
        Self {
            action_run_link: config.action_run_link.clone(),
            email: config.email.clone(),
            name: config.name.clone(),
            repository_link: config.repository_link.clone(),
            resume_link: config.resume_link.clone(),
            timestamp: format_timestamp(at),
        }
    }

    pub fn now(config: &Config) -> Self {
        Self::new(config, Utc::now())
    }

    /// Compact UTF-8 JSON with sorted keys. Non-ASCII is written literally.
    pub fn to_canonical_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// ISO 8601, millisecond precision, `Z` designator.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn timestamp_now() -> String {
    format_timestamp(Utc::now())
}
