use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_transcribe::Client;
use aws_sdk_transcribe::types::{
    LanguageCode, Media, MediaFormat as SdkMediaFormat, TranscriptionJobStatus,
};

use crate::application::ports::{TranscriptionService, TranscriptionServiceError};
use crate::domain::{JobName, JobStatus, TranscriptionJob};

pub struct AwsTranscribeService {
    client: Client,
}

impl AwsTranscribeService {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl TranscriptionService for AwsTranscribeService {
    async fn start_job(&self, job: &TranscriptionJob) -> Result<(), TranscriptionServiceError> {
        tracing::debug!(
            job_name = %job.name,
            media_uri = %job.media,
            output = %job.output,
            "Submitting Amazon Transcribe job"
        );

        self.client
            .start_transcription_job()
            .transcription_job_name(job.name.as_str())
            .media(Media::builder().media_file_uri(job.media.to_uri()).build())
            .media_format(SdkMediaFormat::from(job.media_format.as_str()))
            .language_code(LanguageCode::from(job.language_code.as_str()))
            .output_bucket_name(job.output.bucket())
            .output_key(job.output.key())
            .send()
            .await
            .map_err(|e| {
                TranscriptionServiceError::SubmissionFailed(e.into_service_error().to_string())
            })?;

        Ok(())
    }

    async fn job_status(&self, name: &JobName) -> Result<JobStatus, TranscriptionServiceError> {
        let response = self
            .client
            .get_transcription_job()
            .transcription_job_name(name.as_str())
            .send()
            .await
            .map_err(|e| {
                TranscriptionServiceError::StatusQueryFailed(e.into_service_error().to_string())
            })?;

        let job = response
            .transcription_job()
            .ok_or_else(|| TranscriptionServiceError::JobNotFound(name.to_string()))?;

        match job.transcription_job_status() {
            Some(TranscriptionJobStatus::Queued) => Ok(JobStatus::Queued),
            Some(TranscriptionJobStatus::InProgress) => Ok(JobStatus::InProgress),
            Some(TranscriptionJobStatus::Completed) => Ok(JobStatus::Completed),
            Some(TranscriptionJobStatus::Failed) => {
                tracing::warn!(
                    job_name = %name,
                    reason = job.failure_reason().unwrap_or("unknown"),
                    "Amazon Transcribe reported job failure"
                );
                Ok(JobStatus::Failed)
            }
            Some(other) => Err(TranscriptionServiceError::InvalidResponse(format!(
                "unknown job status: {}",
                other.as_str()
            ))),
            None => Err(TranscriptionServiceError::InvalidResponse(
                "job status missing".to_string(),
            )),
        }
    }
}
