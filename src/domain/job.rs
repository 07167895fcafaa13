use chrono::{DateTime, Utc};

use super::{JobName, JobStatus, MediaFormat, ObjectLocation};

#[derive(Debug, Clone)]
pub struct TranscriptionJob {
    pub name: JobName,
    pub media: ObjectLocation,
    pub media_format: MediaFormat,
    pub language_code: String,
    pub output: ObjectLocation,
    pub status: JobStatus,
    pub submitted_at: DateTime<Utc>,
}

impl TranscriptionJob {
    pub fn new(
        name_prefix: &str,
        media: ObjectLocation,
        media_format: MediaFormat,
        language_code: String,
        output: ObjectLocation,
    ) -> Self {
        let now = Utc::now();
        Self {
            name: JobName::from_time(name_prefix, now),
            media,
            media_format,
            language_code,
            output,
            status: JobStatus::Queued,
            submitted_at: now,
        }
    }
}
