use async_trait::async_trait;

use crate::domain::{JobName, JobStatus, TranscriptionJob};

#[async_trait]
pub trait TranscriptionService: Send + Sync {
    async fn start_job(&self, job: &TranscriptionJob) -> Result<(), TranscriptionServiceError>;

    async fn job_status(&self, name: &JobName) -> Result<JobStatus, TranscriptionServiceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    #[error("job submission failed: {0}")]
    SubmissionFailed(String),
    #[error("status query failed: {0}")]
    StatusQueryFailed(String),
    #[error("job not found: {0}")]
    JobNotFound(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
