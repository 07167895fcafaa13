use std::sync::Arc;

use crate::application::ports::{
    ObjectStorage, ObjectStorageError, SpeechSynthesisError, SpeechSynthesizer, TranslationError,
    Translator,
};
use crate::domain::{AudioFormat, ObjectLocation};

use super::text_chunker::{ChunkBoundary, ChunkingError, split_text};

/// Lets the translation service detect the source language itself.
pub const AUTO_SOURCE_LANGUAGE: &str = "auto";

#[derive(Debug, Clone)]
pub struct ResynthesisOptions {
    pub target_language: String,
    pub translation_chunk_size: usize,
    pub synthesis_chunk_size: usize,
    pub chunk_boundary: ChunkBoundary,
    pub voice_id: String,
    pub audio_format: AudioFormat,
    pub output_prefix: String,
}

#[derive(Debug, Clone)]
pub struct ResynthesisOutput {
    pub translated_text: String,
    pub artifacts: Vec<ObjectLocation>,
}

/// Translates a transcript and speaks it again in the target language.
///
/// Each synthesized chunk is stored as its own object; nothing stitches the
/// pieces back together.
pub struct ResynthesisService {
    translator: Arc<dyn Translator>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    storage: Arc<dyn ObjectStorage>,
    options: ResynthesisOptions,
}

impl ResynthesisService {
    pub fn new(
        translator: Arc<dyn Translator>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        storage: Arc<dyn ObjectStorage>,
        options: ResynthesisOptions,
    ) -> Self {
        Self {
            translator,
            synthesizer,
            storage,
            options,
        }
    }

    #[tracing::instrument(
        skip(self, text),
        fields(target_language = %self.options.target_language, chars = text.len())
    )]
    pub async fn run(
        &self,
        text: &str,
        source_language: &str,
        bucket: &str,
    ) -> Result<ResynthesisOutput, ResynthesisError> {
        let translated_text = self.translate(text, source_language).await?;

        let speech_chunks = split_text(
            &translated_text,
            self.options.synthesis_chunk_size,
            self.options.chunk_boundary,
        )?;

        let mut artifacts = Vec::with_capacity(speech_chunks.len());
        for chunk in &speech_chunks {
            let audio = self
                .synthesizer
                .synthesize(&chunk.text, self.options.audio_format, &self.options.voice_id)
                .await
                .map_err(|source| ResynthesisError::Synthesis {
                    chunk_index: chunk.index,
                    source,
                })?;

            let location = ObjectLocation::new(
                bucket,
                audio_artifact_key(&self.options.output_prefix, chunk.index, self.options.audio_format),
            );
            let size = audio.len();

            self.storage
                .put(&location, audio, self.options.audio_format.content_type())
                .await
                .map_err(ResynthesisError::Storage)?;

            tracing::debug!(chunk_index = chunk.index, bytes = size, location = %location, "Stored synthesized audio");
            artifacts.push(location);
        }

        tracing::info!(artifacts = artifacts.len(), "Resynthesis completed");

        Ok(ResynthesisOutput {
            translated_text,
            artifacts,
        })
    }

    async fn translate(&self, text: &str, source_language: &str) -> Result<String, ResynthesisError> {
        let chunks = split_text(
            text,
            self.options.translation_chunk_size,
            self.options.chunk_boundary,
        )?;

        let mut translated = String::with_capacity(text.len());
        for chunk in &chunks {
            let part = self
                .translator
                .translate(&chunk.text, source_language, &self.options.target_language)
                .await
                .map_err(|source| ResynthesisError::Translation {
                    chunk_index: chunk.index,
                    source,
                })?;
            translated.push_str(&part);
        }

        tracing::debug!(
            chunks = chunks.len(),
            chars = translated.len(),
            "Transcript translated"
        );

        Ok(translated)
    }
}

/// `{prefix}_{index}.{extension}`, with a zero-based index.
pub fn audio_artifact_key(prefix: &str, index: usize, format: AudioFormat) -> String {
    format!("{}_{}.{}", prefix, index, format.extension())
}

#[derive(Debug, thiserror::Error)]
pub enum ResynthesisError {
    #[error("chunking: {0}")]
    Chunking(#[from] ChunkingError),
    #[error("translation of chunk {chunk_index}: {source}")]
    Translation {
        chunk_index: usize,
        source: TranslationError,
    },
    #[error("synthesis of chunk {chunk_index}: {source}")]
    Synthesis {
        chunk_index: usize,
        source: SpeechSynthesisError,
    },
    #[error("storage: {0}")]
    Storage(ObjectStorageError),
}
