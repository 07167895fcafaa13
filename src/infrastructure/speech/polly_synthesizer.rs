use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_polly::Client;
use aws_sdk_polly::types::{OutputFormat, VoiceId};
use bytes::Bytes;

use crate::application::ports::{SpeechSynthesisError, SpeechSynthesizer};
use crate::domain::AudioFormat;

pub struct PollySynthesizer {
    client: Client,
}

impl PollySynthesizer {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for PollySynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        format: AudioFormat,
        voice_id: &str,
    ) -> Result<Bytes, SpeechSynthesisError> {
        let response = self
            .client
            .synthesize_speech()
            .text(text)
            .output_format(OutputFormat::from(format.as_str()))
            .voice_id(VoiceId::from(voice_id))
            .send()
            .await
            .map_err(|e| {
                SpeechSynthesisError::ApiRequestFailed(e.into_service_error().to_string())
            })?;

        let audio = response
            .audio_stream
            .collect()
            .await
            .map_err(|e| SpeechSynthesisError::StreamFailed(e.to_string()))?
            .into_bytes();

        tracing::debug!(
            voice = voice_id,
            format = %format,
            bytes = audio.len(),
            "Amazon Polly synthesis completed"
        );

        Ok(audio)
    }
}
