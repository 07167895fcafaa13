use std::fmt;

use chrono::{DateTime, Utc};

pub const DEFAULT_JOB_NAME_PREFIX: &str = "transcription_job";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobName(String);

impl JobName {
    /// Derives the name from the submission time, e.g. `transcription_job_1700000000`.
    pub fn from_time(prefix: &str, submitted_at: DateTime<Utc>) -> Self {
        Self(format!("{}_{}", prefix, submitted_at.timestamp()))
    }

    pub fn from_raw(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
