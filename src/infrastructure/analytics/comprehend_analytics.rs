use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_comprehend::Client;
use aws_sdk_comprehend::types::{LanguageCode, SyntaxLanguageCode};

use crate::application::ports::{TextAnalytics, TextAnalyticsError};
use crate::domain::{DetectedLanguage, Entity, Sentiment, SyntaxToken};

/// Upper bound Amazon Comprehend accepts for a single real-time request.
pub const MAX_TEXT_BYTES: usize = 100 * 1024;

const PII_LANGUAGES: [&str; 2] = ["en", "es"];

pub struct ComprehendAnalytics {
    client: Client,
}

impl ComprehendAnalytics {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

fn check_size(text: &str) -> Result<(), TextAnalyticsError> {
    if text.len() > MAX_TEXT_BYTES {
        return Err(TextAnalyticsError::TextTooLarge(text.len()));
    }
    Ok(())
}

fn language(code: &str) -> Result<LanguageCode, TextAnalyticsError> {
    if !LanguageCode::values().contains(&code) {
        return Err(TextAnalyticsError::UnsupportedLanguage(code.to_string()));
    }
    Ok(LanguageCode::from(code))
}

#[async_trait]
impl TextAnalytics for ComprehendAnalytics {
    async fn detect_dominant_language(
        &self,
        text: &str,
    ) -> Result<Vec<DetectedLanguage>, TextAnalyticsError> {
        check_size(text)?;
        let response = self
            .client
            .detect_dominant_language()
            .text(text)
            .send()
            .await
            .map_err(|e| TextAnalyticsError::ApiRequestFailed(e.into_service_error().to_string()))?;

        Ok(response
            .languages()
            .iter()
            .filter_map(|lang| {
                lang.language_code().map(|code| DetectedLanguage {
                    code: code.to_string(),
                    score: lang.score().unwrap_or_default(),
                })
            })
            .collect())
    }

    async fn detect_key_phrases(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<String>, TextAnalyticsError> {
        check_size(text)?;
        let response = self
            .client
            .detect_key_phrases()
            .text(text)
            .language_code(language(language_code)?)
            .send()
            .await
            .map_err(|e| TextAnalyticsError::ApiRequestFailed(e.into_service_error().to_string()))?;

        Ok(response
            .key_phrases()
            .iter()
            .filter_map(|phrase| phrase.text().map(str::to_string))
            .collect())
    }

    async fn detect_entities(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<Entity>, TextAnalyticsError> {
        check_size(text)?;
        let response = self
            .client
            .detect_entities()
            .text(text)
            .language_code(language(language_code)?)
            .send()
            .await
            .map_err(|e| TextAnalyticsError::ApiRequestFailed(e.into_service_error().to_string()))?;

        Ok(response
            .entities()
            .iter()
            .filter_map(|entity| {
                let text = entity.text()?;
                let entity_type = entity.r#type()?;
                Some(Entity::new(text, entity_type.as_str()))
            })
            .collect())
    }

    async fn detect_sentiment(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Sentiment, TextAnalyticsError> {
        check_size(text)?;
        let response = self
            .client
            .detect_sentiment()
            .text(text)
            .language_code(language(language_code)?)
            .send()
            .await
            .map_err(|e| TextAnalyticsError::ApiRequestFailed(e.into_service_error().to_string()))?;

        let label = response
            .sentiment()
            .ok_or_else(|| TextAnalyticsError::InvalidResponse("sentiment missing".to_string()))?;

        label
            .as_str()
            .parse()
            .map_err(TextAnalyticsError::InvalidResponse)
    }

    async fn detect_pii_entities(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<String>, TextAnalyticsError> {
        check_size(text)?;
        if !PII_LANGUAGES.contains(&language_code) {
            return Err(TextAnalyticsError::UnsupportedLanguage(
                language_code.to_string(),
            ));
        }

        let response = self
            .client
            .detect_pii_entities()
            .text(text)
            .language_code(LanguageCode::from(language_code))
            .send()
            .await
            .map_err(|e| TextAnalyticsError::ApiRequestFailed(e.into_service_error().to_string()))?;

        Ok(response
            .entities()
            .iter()
            .filter_map(|entity| entity.r#type().map(|t| t.as_str().to_string()))
            .collect())
    }

    async fn detect_syntax(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<SyntaxToken>, TextAnalyticsError> {
        check_size(text)?;
        if !SyntaxLanguageCode::values().contains(&language_code) {
            return Err(TextAnalyticsError::UnsupportedLanguage(
                language_code.to_string(),
            ));
        }

        let response = self
            .client
            .detect_syntax()
            .text(text)
            .language_code(SyntaxLanguageCode::from(language_code))
            .send()
            .await
            .map_err(|e| TextAnalyticsError::ApiRequestFailed(e.into_service_error().to_string()))?;

        Ok(response
            .syntax_tokens()
            .iter()
            .filter_map(|token| {
                let text = token.text()?;
                let tag = token
                    .part_of_speech()
                    .and_then(|pos| pos.tag())
                    .map(|tag| tag.as_str())
                    .unwrap_or("X");
                Some(SyntaxToken::new(text, tag))
            })
            .collect())
    }
}
