use std::sync::Arc;
use std::time::Duration;

use aws_config::SdkConfig;

use crate::application::ports::{
    ObjectStorage, ObjectStorageError, SpeechSynthesizer, Summarizer, TextAnalytics,
    TranscriptionService, Translator,
};
use crate::application::services::{
    MediaPipeline, PipelineOptions, PipelineRequest, PollPolicy, ReportLayout, ResynthesisOptions,
    ResynthesisService,
};
use crate::domain::ObjectLocation;
use crate::infrastructure::analytics::ComprehendAnalytics;
use crate::infrastructure::speech::PollySynthesizer;
use crate::infrastructure::storage::ObjectStorageFactory;
use crate::infrastructure::summarization::FrequencySummarizer;
use crate::infrastructure::transcription::AwsTranscribeService;
use crate::infrastructure::translation::AwsTranslateClient;

use super::config::{Settings, SummaryStrategy};

const FALLBACK_REGION: &str = "us-east-1";

/// The external collaborators a pipeline is assembled from.
pub struct Adapters {
    pub transcription: Arc<dyn TranscriptionService>,
    pub storage: Arc<dyn ObjectStorage>,
    pub analytics: Arc<dyn TextAnalytics>,
    pub translator: Arc<dyn Translator>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl Adapters {
    pub fn aws(settings: &Settings, sdk_config: &SdkConfig) -> Result<Self, ObjectStorageError> {
        let region = settings
            .aws
            .region
            .clone()
            .or_else(|| sdk_config.region().map(|r| r.to_string()))
            .unwrap_or_else(|| FALLBACK_REGION.to_string());

        Ok(Self {
            transcription: Arc::new(AwsTranscribeService::new(sdk_config)),
            storage: ObjectStorageFactory::create(&settings.storage, &region)?,
            analytics: Arc::new(ComprehendAnalytics::new(sdk_config)),
            translator: Arc::new(AwsTranslateClient::new(sdk_config)),
            synthesizer: Arc::new(PollySynthesizer::new(sdk_config)),
        })
    }
}

pub fn build_pipeline(settings: &Settings, adapters: Adapters) -> MediaPipeline {
    let mut pipeline = MediaPipeline::new(
        adapters.transcription,
        Arc::clone(&adapters.storage),
        adapters.analytics,
        poll_policy(settings),
        pipeline_options(settings),
    );

    if settings.summary.strategy == SummaryStrategy::Extractive {
        let summarizer: Arc<dyn Summarizer> =
            Arc::new(FrequencySummarizer::new(settings.summary.sentence_count));
        pipeline = pipeline.with_summarizer(summarizer);
    }

    if settings.resynthesis.enabled {
        pipeline = pipeline.with_resynthesis(ResynthesisService::new(
            adapters.translator,
            adapters.synthesizer,
            adapters.storage,
            resynthesis_options(settings),
        ));
    }

    pipeline
}

pub fn pipeline_request(settings: &Settings) -> PipelineRequest {
    let bucket = settings.storage.bucket.as_str();
    let transcription = &settings.transcription;

    PipelineRequest {
        media: ObjectLocation::new(bucket, transcription.media_key.as_str()),
        media_format: transcription.media_format,
        language_code: transcription.language_code.clone(),
        transcript_output: ObjectLocation::new(bucket, transcription.output_key.as_str()),
        report_output: ObjectLocation::new(bucket, settings.report.key.as_str()),
        job_name_prefix: transcription.job_name_prefix.clone(),
    }
}

pub fn poll_policy(settings: &Settings) -> PollPolicy {
    PollPolicy {
        interval: Duration::from_secs(settings.transcription.poll_interval_secs),
        timeout: settings
            .transcription
            .poll_timeout_secs
            .map(Duration::from_secs),
    }
}

pub fn pipeline_options(settings: &Settings) -> PipelineOptions {
    PipelineOptions {
        analytics_chunk_size: settings.analytics.chunk_size,
        chunk_boundary: settings.analytics.chunk_boundary,
        analytics_concurrency: settings.analytics.concurrency,
        failure_policy: settings.analytics.failure_policy,
        fallback_language: settings.analytics.fallback_language.clone(),
        summary_phrase_count: settings.summary.key_phrase_count,
        layout: ReportLayout {
            entity_limit: settings.report.entity_limit,
            key_phrase_limit: settings.report.key_phrase_limit,
            syntax_token_limit: settings.report.syntax_token_limit,
        },
        resynthesis_source_language: settings.resynthesis.source_language.clone(),
    }
}

pub fn resynthesis_options(settings: &Settings) -> ResynthesisOptions {
    let resynthesis = &settings.resynthesis;
    ResynthesisOptions {
        target_language: resynthesis.target_language.clone(),
        translation_chunk_size: resynthesis.translation_chunk_size,
        synthesis_chunk_size: resynthesis.synthesis_chunk_size,
        chunk_boundary: settings.analytics.chunk_boundary,
        voice_id: resynthesis.voice_id.clone(),
        audio_format: resynthesis.output_format,
        output_prefix: resynthesis.output_prefix.clone(),
    }
}
