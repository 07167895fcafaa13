mod aggregator;
mod analytics_fan_out;
mod job_poller;
mod pipeline;
mod report_formatter;
mod resynthesis_service;
mod text_chunker;

pub use aggregator::{
    DEFAULT_SUMMARY_PHRASE_COUNT, aggregate, dedup_preserving_order, key_phrase_summary,
    majority_vote,
};
pub use analytics_fan_out::{
    AnalyticsError, AnalyticsFanOut, DEFAULT_FALLBACK_LANGUAGE, FailurePolicy,
};
pub use job_poller::{
    DEFAULT_POLL_INTERVAL, DEFAULT_POLL_TIMEOUT, JobPoller, PollError, PollPolicy,
};
pub use pipeline::{
    DEFAULT_ANALYTICS_CHUNK_SIZE, MediaPipeline, PipelineError, PipelineOptions, PipelineOutcome,
    PipelineRequest,
};
pub use report_formatter::{REPORT_CONTENT_TYPE, ReportLayout, SECTION_LABELS, render_report};
pub use resynthesis_service::{
    AUTO_SOURCE_LANGUAGE, ResynthesisError, ResynthesisOptions, ResynthesisOutput,
    ResynthesisService, audio_artifact_key,
};
pub use text_chunker::{
    ChunkBoundary, ChunkingError, split_at_whitespace, split_fixed, split_text,
};
