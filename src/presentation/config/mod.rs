mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    AnalyticsSettings, AwsSettings, LoggingSettings, ReportSettings, ResynthesisSettings,
    Settings, SettingsError, StorageProviderSetting, StorageSettings, SummarySettings,
    SummaryStrategy, TranscriptionSettings,
};
