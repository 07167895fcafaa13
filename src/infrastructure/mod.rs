pub mod analytics;
pub mod aws;
pub mod observability;
pub mod speech;
pub mod storage;
pub mod summarization;
pub mod transcription;
pub mod translation;
