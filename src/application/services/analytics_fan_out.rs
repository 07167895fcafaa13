use std::sync::Arc;

use futures::{StreamExt, TryStreamExt, stream};
use serde::Deserialize;
use tracing::Instrument;

use crate::application::ports::{TextAnalytics, TextAnalyticsError};
use crate::domain::{AnalyticsCall, Chunk, ChunkAnalysis};

pub const DEFAULT_FALLBACK_LANGUAGE: &str = "en";

/// What to do when a single analytics call fails for a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Abort the whole run on the first failed call.
    #[default]
    FailFast,
    /// Leave the failed field empty, log it and keep going.
    BestEffort,
}

/// Runs every analytics call against every chunk.
///
/// Chunks go through an ordered stream with at most `concurrency` chunks in
/// flight, so results always come back in chunk order. Within a chunk the
/// dominant language is detected first and fed to the remaining calls,
/// which run concurrently.
pub struct AnalyticsFanOut {
    analytics: Arc<dyn TextAnalytics>,
    concurrency: usize,
    failure_policy: FailurePolicy,
    fallback_language: String,
}

impl AnalyticsFanOut {
    pub fn new(
        analytics: Arc<dyn TextAnalytics>,
        concurrency: usize,
        failure_policy: FailurePolicy,
        fallback_language: impl Into<String>,
    ) -> Self {
        Self {
            analytics,
            concurrency: concurrency.max(1),
            failure_policy,
            fallback_language: fallback_language.into(),
        }
    }

    pub async fn analyze(&self, chunks: &[Chunk]) -> Result<Vec<ChunkAnalysis>, AnalyticsError> {
        stream::iter(chunks)
            .map(|chunk| {
                let span = tracing::debug_span!(
                    "analyze_chunk",
                    chunk_index = chunk.index,
                    chars = chunk.char_len()
                );
                self.analyze_chunk(chunk).instrument(span)
            })
            .buffered(self.concurrency)
            .try_collect()
            .await
    }

    async fn analyze_chunk(&self, chunk: &Chunk) -> Result<ChunkAnalysis, AnalyticsError> {
        let text = chunk.text.as_str();
        let mut analysis = ChunkAnalysis::new(chunk.index);

        let languages = self.analytics.detect_dominant_language(text).await;
        let detected = self
            .settle(&mut analysis, AnalyticsCall::DominantLanguage, languages)?
            .and_then(|langs| langs.into_iter().next())
            .map(|lang| lang.code);
        let language_code = detected
            .clone()
            .unwrap_or_else(|| self.fallback_language.clone());
        analysis.language = detected;

        let (key_phrases, entities, sentiment, pii_types, syntax_tokens) = tokio::join!(
            self.analytics.detect_key_phrases(text, &language_code),
            self.analytics.detect_entities(text, &language_code),
            self.analytics.detect_sentiment(text, &language_code),
            self.analytics.detect_pii_entities(text, &language_code),
            self.analytics.detect_syntax(text, &language_code),
        );

        let key_phrases = self.settle(&mut analysis, AnalyticsCall::KeyPhrases, key_phrases)?;
        let entities = self.settle(&mut analysis, AnalyticsCall::Entities, entities)?;
        let sentiment = self.settle(&mut analysis, AnalyticsCall::Sentiment, sentiment)?;
        let pii_types = self.settle(&mut analysis, AnalyticsCall::PiiEntities, pii_types)?;
        let syntax_tokens = self.settle(&mut analysis, AnalyticsCall::Syntax, syntax_tokens)?;

        analysis.key_phrases = key_phrases.unwrap_or_default();
        analysis.entities = entities.unwrap_or_default();
        analysis.sentiment = sentiment;
        analysis.pii_types = pii_types.unwrap_or_default();
        analysis.syntax_tokens = syntax_tokens.unwrap_or_default();

        tracing::debug!(
            language = %language_code,
            key_phrases = analysis.key_phrases.len(),
            entities = analysis.entities.len(),
            failed_calls = analysis.failed_calls.len(),
            "Chunk analyzed"
        );

        Ok(analysis)
    }

    fn settle<T>(
        &self,
        analysis: &mut ChunkAnalysis,
        call: AnalyticsCall,
        result: Result<T, TextAnalyticsError>,
    ) -> Result<Option<T>, AnalyticsError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(source) => match self.failure_policy {
                FailurePolicy::FailFast => Err(AnalyticsError {
                    chunk_index: analysis.chunk_index,
                    call,
                    source,
                }),
                FailurePolicy::BestEffort => {
                    tracing::warn!(
                        chunk_index = analysis.chunk_index,
                        call = %call,
                        error = %source,
                        "Analytics call failed, continuing without it"
                    );
                    analysis.failed_calls.push(call);
                    Ok(None)
                }
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("chunk {chunk_index}: {call} failed: {source}")]
pub struct AnalyticsError {
    pub chunk_index: usize,
    pub call: AnalyticsCall,
    pub source: TextAnalyticsError,
}
