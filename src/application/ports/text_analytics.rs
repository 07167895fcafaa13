use async_trait::async_trait;

use crate::domain::{DetectedLanguage, Entity, Sentiment, SyntaxToken};

/// Stateless language analytics over a span of text.
///
/// Every call except language detection takes the language code the text
/// is written in.
#[async_trait]
pub trait TextAnalytics: Send + Sync {
    async fn detect_dominant_language(
        &self,
        text: &str,
    ) -> Result<Vec<DetectedLanguage>, TextAnalyticsError>;

    async fn detect_key_phrases(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<String>, TextAnalyticsError>;

    async fn detect_entities(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<Entity>, TextAnalyticsError>;

    async fn detect_sentiment(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Sentiment, TextAnalyticsError>;

    /// Returns the PII type label of every detected span.
    async fn detect_pii_entities(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<String>, TextAnalyticsError>;

    async fn detect_syntax(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<SyntaxToken>, TextAnalyticsError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextAnalyticsError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("text too large: {0} bytes")]
    TextTooLarge(usize),
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
