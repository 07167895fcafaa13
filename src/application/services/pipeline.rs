use std::sync::Arc;

use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::application::ports::{
    ObjectStorage, ObjectStorageError, Summarizer, SummarizerError, TextAnalytics,
    TranscriptionService, TranscriptionServiceError,
};
use crate::domain::{
    AggregateReport, JobName, JobStatus, MediaFormat, ObjectLocation, Transcript,
    TranscriptError, TranscriptionJob,
};

use super::aggregator::{DEFAULT_SUMMARY_PHRASE_COUNT, aggregate, key_phrase_summary};
use super::analytics_fan_out::{AnalyticsError, AnalyticsFanOut, FailurePolicy};
use super::job_poller::{JobPoller, PollError, PollPolicy};
use super::report_formatter::{REPORT_CONTENT_TYPE, ReportLayout, render_report};
use super::resynthesis_service::{AUTO_SOURCE_LANGUAGE, ResynthesisError, ResynthesisService};
use super::text_chunker::{ChunkBoundary, ChunkingError, split_text};

pub const DEFAULT_ANALYTICS_CHUNK_SIZE: usize = 5000;

/// What to transcribe and where to put the results.
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    pub media: ObjectLocation,
    pub media_format: MediaFormat,
    pub language_code: String,
    pub transcript_output: ObjectLocation,
    pub report_output: ObjectLocation,
    pub job_name_prefix: String,
}

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub analytics_chunk_size: usize,
    pub chunk_boundary: ChunkBoundary,
    pub analytics_concurrency: usize,
    pub failure_policy: FailurePolicy,
    pub fallback_language: String,
    pub summary_phrase_count: usize,
    pub layout: ReportLayout,
    /// `None` uses the first detected language, or lets the translator detect it.
    pub resynthesis_source_language: Option<String>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            analytics_chunk_size: DEFAULT_ANALYTICS_CHUNK_SIZE,
            chunk_boundary: ChunkBoundary::Fixed,
            analytics_concurrency: 1,
            failure_policy: FailurePolicy::FailFast,
            fallback_language: super::analytics_fan_out::DEFAULT_FALLBACK_LANGUAGE.to_string(),
            summary_phrase_count: DEFAULT_SUMMARY_PHRASE_COUNT,
            layout: ReportLayout::default(),
            resynthesis_source_language: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub job_name: JobName,
    pub transcript: Transcript,
    pub report: AggregateReport,
    pub rendered_report: String,
    pub report_location: ObjectLocation,
    pub audio_artifacts: Vec<ObjectLocation>,
}

/// Audio in, report (and optionally translated speech) out.
///
/// Submits the transcription job, waits for it, analyzes the transcript
/// chunk by chunk, stores the rendered report and, when configured,
/// translates and re-synthesizes the transcript.
pub struct MediaPipeline {
    transcription: Arc<dyn TranscriptionService>,
    storage: Arc<dyn ObjectStorage>,
    poller: JobPoller,
    fan_out: AnalyticsFanOut,
    summarizer: Option<Arc<dyn Summarizer>>,
    resynthesis: Option<ResynthesisService>,
    options: PipelineOptions,
}

impl MediaPipeline {
    pub fn new(
        transcription: Arc<dyn TranscriptionService>,
        storage: Arc<dyn ObjectStorage>,
        analytics: Arc<dyn TextAnalytics>,
        poll_policy: PollPolicy,
        options: PipelineOptions,
    ) -> Self {
        let poller = JobPoller::new(Arc::clone(&transcription), poll_policy);
        let fan_out = AnalyticsFanOut::new(
            analytics,
            options.analytics_concurrency,
            options.failure_policy,
            options.fallback_language.clone(),
        );

        Self {
            transcription,
            storage,
            poller,
            fan_out,
            summarizer: None,
            resynthesis: None,
            options,
        }
    }

    /// Summarize the transcript text instead of joining key phrases.
    pub fn with_summarizer(mut self, summarizer: Arc<dyn Summarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    pub fn with_resynthesis(mut self, resynthesis: ResynthesisService) -> Self {
        self.resynthesis = Some(resynthesis);
        self
    }

    pub async fn run(
        &self,
        request: &PipelineRequest,
        cancel: &CancellationToken,
    ) -> Result<PipelineOutcome, PipelineError> {
        let job = TranscriptionJob::new(
            &request.job_name_prefix,
            request.media.clone(),
            request.media_format,
            request.language_code.clone(),
            request.transcript_output.clone(),
        );

        let span = tracing::info_span!(
            "media_pipeline",
            job_name = %job.name,
            media = %job.media,
        );

        self.run_job(job, request, cancel).instrument(span).await
    }

    async fn run_job(
        &self,
        mut job: TranscriptionJob,
        request: &PipelineRequest,
        cancel: &CancellationToken,
    ) -> Result<PipelineOutcome, PipelineError> {
        tracing::info!(format = %job.media_format, language = %job.language_code, "Starting transcription job");
        self.transcription
            .start_job(&job)
            .await
            .map_err(PipelineError::Submission)?;

        tracing::info!("Waiting for transcription job to complete");
        job.status = self.poller.wait_for_terminal(&job.name, cancel).await?;

        if job.status != JobStatus::Completed {
            tracing::error!(status = %job.status, "Transcription job did not complete");
            return Err(PipelineError::JobFailed {
                job_name: job.name,
                status: job.status,
            });
        }

        tracing::info!(output = %job.output, "Transcription completed, processing results");
        let transcript = self.fetch_transcript(&job.output).await?;
        ensure_not_cancelled(cancel)?;

        let report = self.analyze(&transcript).await?;
        let rendered_report = render_report(&report, &self.options.layout);

        self.storage
            .put(
                &request.report_output,
                Bytes::from(rendered_report.clone()),
                REPORT_CONTENT_TYPE,
            )
            .await
            .map_err(PipelineError::Storage)?;
        tracing::info!(location = %request.report_output, "Report stored");

        let audio_artifacts = match &self.resynthesis {
            Some(resynthesis) => {
                ensure_not_cancelled(cancel)?;
                let source_language = self.resynthesis_source_language(&report);
                resynthesis
                    .run(
                        transcript.as_str(),
                        &source_language,
                        request.report_output.bucket(),
                    )
                    .await?
                    .artifacts
            }
            None => Vec::new(),
        };

        Ok(PipelineOutcome {
            job_name: job.name,
            transcript,
            report,
            rendered_report,
            report_location: request.report_output.clone(),
            audio_artifacts,
        })
    }

    async fn fetch_transcript(&self, output: &ObjectLocation) -> Result<Transcript, PipelineError> {
        let artifact = self
            .storage
            .get(output)
            .await
            .map_err(PipelineError::Storage)?;
        let transcript = Transcript::from_artifact(&artifact)?;

        tracing::debug!(
            chars = transcript.as_str().chars().count(),
            "Transcript retrieved"
        );

        Ok(transcript)
    }

    /// Chunk, fan out, aggregate and summarize.
    pub async fn analyze(&self, transcript: &Transcript) -> Result<AggregateReport, PipelineError> {
        let chunks = split_text(
            transcript.as_str(),
            self.options.analytics_chunk_size,
            self.options.chunk_boundary,
        )?;
        tracing::info!(chunks = chunks.len(), "Running text analytics");

        let analyses = self.fan_out.analyze(&chunks).await?;
        let mut report = aggregate(&analyses);

        report.summary = match &self.summarizer {
            Some(summarizer) if !transcript.as_str().trim().is_empty() => summarizer
                .summarize(transcript.as_str())
                .await
                .map_err(PipelineError::Summarization)?,
            _ => key_phrase_summary(&report.key_phrases, self.options.summary_phrase_count),
        };

        Ok(report)
    }

    fn resynthesis_source_language(&self, report: &AggregateReport) -> String {
        self.options
            .resynthesis_source_language
            .clone()
            .or_else(|| report.languages.first().cloned())
            .unwrap_or_else(|| AUTO_SOURCE_LANGUAGE.to_string())
    }
}

fn ensure_not_cancelled(cancel: &CancellationToken) -> Result<(), PipelineError> {
    if cancel.is_cancelled() {
        return Err(PipelineError::Cancelled);
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("submission: {0}")]
    Submission(TranscriptionServiceError),
    #[error("polling: {0}")]
    Polling(#[from] PollError),
    #[error("transcription job {job_name} ended with status {status}")]
    JobFailed { job_name: JobName, status: JobStatus },
    #[error("storage: {0}")]
    Storage(ObjectStorageError),
    #[error("transcript: {0}")]
    Transcript(#[from] TranscriptError),
    #[error("chunking: {0}")]
    Chunking(#[from] ChunkingError),
    #[error("analytics: {0}")]
    Analytics(#[from] AnalyticsError),
    #[error("summarization: {0}")]
    Summarization(SummarizerError),
    #[error("resynthesis: {0}")]
    Resynthesis(#[from] ResynthesisError),
    #[error("pipeline cancelled")]
    Cancelled,
}
