use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::application::ports::{TranscriptionService, TranscriptionServiceError};
use crate::domain::{JobName, JobStatus};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    /// `None` polls until the job ends or the token is cancelled.
    pub timeout: Option<Duration>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: Some(DEFAULT_POLL_TIMEOUT),
        }
    }
}

pub struct JobPoller {
    service: Arc<dyn TranscriptionService>,
    policy: PollPolicy,
}

impl JobPoller {
    pub fn new(service: Arc<dyn TranscriptionService>, policy: PollPolicy) -> Self {
        Self { service, policy }
    }

    /// Queries the job status every `interval` until it is terminal and
    /// returns that status. No query is made once a terminal status is seen.
    pub async fn wait_for_terminal(
        &self,
        name: &JobName,
        cancel: &CancellationToken,
    ) -> Result<JobStatus, PollError> {
        let poll_future = self.poll_loop(name, cancel);

        match self.policy.timeout {
            Some(limit) => tokio::time::timeout(limit, poll_future)
                .await
                .map_err(|_| PollError::TimedOut(limit))?,
            None => poll_future.await,
        }
    }

    async fn poll_loop(
        &self,
        name: &JobName,
        cancel: &CancellationToken,
    ) -> Result<JobStatus, PollError> {
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;

            let status = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(PollError::Cancelled),
                result = self.service.job_status(name) => result.map_err(PollError::Status)?,
            };

            tracing::debug!(job_name = %name, status = %status, attempt, "Polled transcription job");

            if status.is_terminal() {
                return Ok(status);
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(PollError::Cancelled),
                _ = tokio::time::sleep(self.policy.interval) => {}
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("status query: {0}")]
    Status(TranscriptionServiceError),
    #[error("job did not finish within {0:?}")]
    TimedOut(Duration),
    #[error("polling cancelled")]
    Cancelled,
}
