use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_translate::Client;

use crate::application::ports::{TranslationError, Translator};

pub struct AwsTranslateClient {
    client: Client,
}

impl AwsTranslateClient {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl Translator for AwsTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        let response = self
            .client
            .translate_text()
            .text(text)
            .source_language_code(source_language)
            .target_language_code(target_language)
            .send()
            .await
            .map_err(|e| TranslationError::ApiRequestFailed(e.into_service_error().to_string()))?;

        tracing::debug!(
            source = source_language,
            target = target_language,
            chars = response.translated_text().len(),
            "Amazon Translate request completed"
        );

        Ok(response.translated_text().to_string())
    }
}
