mod analysis;
mod chunk;
mod job;
mod job_name;
mod job_status;
mod media_format;
mod object_location;
mod report;
mod transcript;

pub use analysis::{
    AnalyticsCall, ChunkAnalysis, DetectedLanguage, Entity, Sentiment, SyntaxToken,
};
pub use chunk::Chunk;
pub use job::TranscriptionJob;
pub use job_name::{DEFAULT_JOB_NAME_PREFIX, JobName};
pub use job_status::JobStatus;
pub use media_format::{AudioFormat, MediaFormat};
pub use object_location::ObjectLocation;
pub use report::AggregateReport;
pub use transcript::{Transcript, TranscriptError};
