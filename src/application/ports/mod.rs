mod object_storage;
mod speech_synthesizer;
mod summarizer;
mod text_analytics;
mod transcription_service;
mod translator;

pub use object_storage::{ObjectStorage, ObjectStorageError};
pub use speech_synthesizer::{SpeechSynthesisError, SpeechSynthesizer};
pub use summarizer::{Summarizer, SummarizerError};
pub use text_analytics::{TextAnalytics, TextAnalyticsError};
pub use transcription_service::{TranscriptionService, TranscriptionServiceError};
pub use translator::{TranslationError, Translator};
