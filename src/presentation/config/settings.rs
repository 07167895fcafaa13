use config::{Config, Environment as EnvironmentSource, File};
use serde::Deserialize;

use crate::application::services::{
    ChunkBoundary, DEFAULT_ANALYTICS_CHUNK_SIZE, DEFAULT_FALLBACK_LANGUAGE,
    DEFAULT_SUMMARY_PHRASE_COUNT, FailurePolicy,
};
use crate::domain::{AudioFormat, DEFAULT_JOB_NAME_PREFIX, MediaFormat};

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub aws: AwsSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub transcription: TranscriptionSettings,
    #[serde(default)]
    pub analytics: AnalyticsSettings,
    #[serde(default)]
    pub summary: SummarySettings,
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub resynthesis: ResynthesisSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Reads `appsettings.{environment}.toml` when present, then `APP_`
    /// prefixed environment variables, e.g. `APP_STORAGE__BUCKET`.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let file_name = format!("appsettings.{}", environment.as_str());

        let settings: Settings = Config::builder()
            .add_source(File::with_name(&file_name).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.storage.bucket.trim().is_empty() {
            return Err(SettingsError::Invalid("storage.bucket is required".into()));
        }
        if self.transcription.media_key.trim().is_empty() {
            return Err(SettingsError::Invalid(
                "transcription.media_key is required".into(),
            ));
        }
        if self.transcription.poll_interval_secs == 0 {
            return Err(SettingsError::Invalid(
                "transcription.poll_interval_secs must be positive".into(),
            ));
        }
        if self.analytics.chunk_size == 0 {
            return Err(SettingsError::Invalid(
                "analytics.chunk_size must be positive".into(),
            ));
        }
        if self.analytics.concurrency == 0 {
            return Err(SettingsError::Invalid(
                "analytics.concurrency must be positive".into(),
            ));
        }
        if self.resynthesis.enabled
            && (self.resynthesis.translation_chunk_size == 0
                || self.resynthesis.synthesis_chunk_size == 0)
        {
            return Err(SettingsError::Invalid(
                "resynthesis chunk sizes must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AwsSettings {
    /// Falls back to the SDK's default region chain when unset.
    pub region: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub bucket: String,
    pub local_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            provider: StorageProviderSetting::S3,
            bucket: String::new(),
            local_path: "./data".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    S3,
    Local,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    pub media_key: String,
    pub media_format: MediaFormat,
    pub language_code: String,
    pub output_key: String,
    pub job_name_prefix: String,
    pub poll_interval_secs: u64,
    /// `None` waits until the job ends or the run is interrupted.
    pub poll_timeout_secs: Option<u64>,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            media_key: String::new(),
            media_format: MediaFormat::Mp3,
            language_code: "en-US".to_string(),
            output_key: "transcribed.json".to_string(),
            job_name_prefix: DEFAULT_JOB_NAME_PREFIX.to_string(),
            poll_interval_secs: 10,
            poll_timeout_secs: Some(3600),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    pub chunk_size: usize,
    pub chunk_boundary: ChunkBoundary,
    pub concurrency: usize,
    pub failure_policy: FailurePolicy,
    pub fallback_language: String,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_ANALYTICS_CHUNK_SIZE,
            chunk_boundary: ChunkBoundary::Fixed,
            concurrency: 1,
            failure_policy: FailurePolicy::FailFast,
            fallback_language: DEFAULT_FALLBACK_LANGUAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SummarySettings {
    pub strategy: SummaryStrategy,
    pub key_phrase_count: usize,
    pub sentence_count: usize,
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            strategy: SummaryStrategy::KeyPhrases,
            key_phrase_count: DEFAULT_SUMMARY_PHRASE_COUNT,
            sentence_count: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStrategy {
    KeyPhrases,
    Extractive,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub key: String,
    pub entity_limit: usize,
    pub key_phrase_limit: usize,
    pub syntax_token_limit: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            key: "summarized.txt".to_string(),
            entity_limit: 10,
            key_phrase_limit: 20,
            syntax_token_limit: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResynthesisSettings {
    pub enabled: bool,
    /// Unset uses the detected transcript language.
    pub source_language: Option<String>,
    pub target_language: String,
    pub translation_chunk_size: usize,
    pub synthesis_chunk_size: usize,
    pub voice_id: String,
    pub output_format: AudioFormat,
    pub output_prefix: String,
}

impl Default for ResynthesisSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            source_language: None,
            target_language: "es".to_string(),
            translation_chunk_size: 5000,
            synthesis_chunk_size: 1500,
            voice_id: "Lucia".to_string(),
            output_format: AudioFormat::Mp3,
            output_prefix: "translated_audio".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid settings: {0}")]
    Invalid(String),
}
