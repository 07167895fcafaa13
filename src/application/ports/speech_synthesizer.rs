use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::AudioFormat;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        format: AudioFormat,
        voice_id: &str,
    ) -> Result<Bytes, SpeechSynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechSynthesisError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("audio stream failed: {0}")]
    StreamFailed(String),
}
