#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use bytes::Bytes;

use murmur::application::ports::{
    SpeechSynthesisError, SpeechSynthesizer, TextAnalytics, TextAnalyticsError,
    TranscriptionService, TranscriptionServiceError, TranslationError, Translator,
};
use murmur::domain::{
    AnalyticsCall, AudioFormat, DetectedLanguage, Entity, JobName, JobStatus, Sentiment,
    SyntaxToken, TranscriptionJob,
};

/// Replays a fixed sequence of job statuses, one per query.
pub struct ScriptedTranscriptionService {
    statuses: Mutex<VecDeque<JobStatus>>,
    submitted: Mutex<Vec<TranscriptionJob>>,
    status_calls: AtomicUsize,
    reject_submission: bool,
}

impl ScriptedTranscriptionService {
    pub fn new(statuses: Vec<JobStatus>) -> Self {
        Self {
            statuses: Mutex::new(statuses.into()),
            submitted: Mutex::new(Vec::new()),
            status_calls: AtomicUsize::new(0),
            reject_submission: false,
        }
    }

    pub fn rejecting_submission() -> Self {
        Self {
            reject_submission: true,
            ..Self::new(vec![])
        }
    }

    /// Never leaves the in-progress state.
    pub fn stuck() -> Self {
        Self::new(vec![JobStatus::InProgress; 10_000])
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    pub fn submitted(&self) -> Vec<TranscriptionJob> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TranscriptionService for ScriptedTranscriptionService {
    async fn start_job(&self, job: &TranscriptionJob) -> Result<(), TranscriptionServiceError> {
        if self.reject_submission {
            return Err(TranscriptionServiceError::SubmissionFailed(
                "access denied".to_string(),
            ));
        }
        self.submitted.lock().unwrap().push(job.clone());
        Ok(())
    }

    async fn job_status(&self, name: &JobName) -> Result<JobStatus, TranscriptionServiceError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        self.statuses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TranscriptionServiceError::JobNotFound(name.to_string()))
    }
}

const KNOWN_ENTITIES: [(&str, &str); 5] = [
    ("Alice", "PERSON"),
    ("Bob", "PERSON"),
    ("Paris", "LOCATION"),
    ("Monday", "DATE"),
    ("Acme", "ORGANIZATION"),
];

/// Dictionary-driven analytics. Sentiment is NEGATIVE when the text says
/// "terrible", NEUTRAL when it says "okay", POSITIVE otherwise.
#[derive(Default)]
pub struct FakeAnalytics {
    failing: HashSet<AnalyticsCall>,
    language: Option<String>,
    calls: AtomicUsize,
    seen_languages: Mutex<Vec<String>>,
}

impl FakeAnalytics {
    pub fn new() -> Self {
        Self {
            language: Some("en".to_string()),
            ..Self::default()
        }
    }

    pub fn failing(calls: &[AnalyticsCall]) -> Self {
        Self {
            failing: calls.iter().copied().collect(),
            ..Self::new()
        }
    }

    pub fn without_language() -> Self {
        Self {
            language: None,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Language codes passed to the language-dependent calls.
    pub fn seen_languages(&self) -> Vec<String> {
        self.seen_languages.lock().unwrap().clone()
    }

    fn enter(&self, call: AnalyticsCall) -> Result<(), TextAnalyticsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&call) {
            return Err(TextAnalyticsError::ApiRequestFailed(format!(
                "{} throttled",
                call
            )));
        }
        Ok(())
    }

    fn record_language(&self, language_code: &str) {
        self.seen_languages
            .lock()
            .unwrap()
            .push(language_code.to_string());
    }
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
}

#[async_trait::async_trait]
impl TextAnalytics for FakeAnalytics {
    async fn detect_dominant_language(
        &self,
        _text: &str,
    ) -> Result<Vec<DetectedLanguage>, TextAnalyticsError> {
        self.enter(AnalyticsCall::DominantLanguage)?;
        Ok(self
            .language
            .iter()
            .map(|code| DetectedLanguage {
                code: code.clone(),
                score: 0.99,
            })
            .collect())
    }

    async fn detect_key_phrases(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<String>, TextAnalyticsError> {
        self.enter(AnalyticsCall::KeyPhrases)?;
        self.record_language(language_code);
        Ok(words(text)
            .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
            .map(str::to_string)
            .collect())
    }

    async fn detect_entities(
        &self,
        text: &str,
        _language_code: &str,
    ) -> Result<Vec<Entity>, TextAnalyticsError> {
        self.enter(AnalyticsCall::Entities)?;
        Ok(words(text)
            .filter_map(|w| {
                KNOWN_ENTITIES
                    .iter()
                    .find(|(name, _)| *name == w)
                    .map(|(name, kind)| Entity::new(*name, *kind))
            })
            .collect())
    }

    async fn detect_sentiment(
        &self,
        text: &str,
        _language_code: &str,
    ) -> Result<Sentiment, TextAnalyticsError> {
        self.enter(AnalyticsCall::Sentiment)?;
        if text.contains("terrible") {
            Ok(Sentiment::Negative)
        } else if text.contains("okay") {
            Ok(Sentiment::Neutral)
        } else {
            Ok(Sentiment::Positive)
        }
    }

    async fn detect_pii_entities(
        &self,
        text: &str,
        _language_code: &str,
    ) -> Result<Vec<String>, TextAnalyticsError> {
        self.enter(AnalyticsCall::PiiEntities)?;
        Ok(words(text)
            .filter_map(|w| match w {
                "Alice" | "Bob" => Some("NAME".to_string()),
                w if w.contains('@') => Some("EMAIL".to_string()),
                _ => None,
            })
            .collect())
    }

    async fn detect_syntax(
        &self,
        text: &str,
        _language_code: &str,
    ) -> Result<Vec<SyntaxToken>, TextAnalyticsError> {
        self.enter(AnalyticsCall::Syntax)?;
        Ok(words(text).map(|w| SyntaxToken::new(w, "X")).collect())
    }
}

/// Tags every chunk with the target language.
#[derive(Default)]
pub struct RecordingTranslator {
    requests: Mutex<Vec<(String, String, String)>>,
}

impl RecordingTranslator {
    pub fn requests(&self) -> Vec<(String, String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Translator for RecordingTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        self.requests.lock().unwrap().push((
            text.to_string(),
            source_language.to_string(),
            target_language.to_string(),
        ));
        Ok(text.to_uppercase())
    }
}

#[derive(Default)]
pub struct RecordingSynthesizer {
    texts: Mutex<Vec<String>>,
    fail_on_call: Option<usize>,
}

impl RecordingSynthesizer {
    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::default()
        }
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SpeechSynthesizer for RecordingSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        format: AudioFormat,
        voice_id: &str,
    ) -> Result<Bytes, SpeechSynthesisError> {
        let mut texts = self.texts.lock().unwrap();
        if self.fail_on_call == Some(texts.len()) {
            return Err(SpeechSynthesisError::ApiRequestFailed(
                "voice unavailable".to_string(),
            ));
        }
        texts.push(text.to_string());
        Ok(Bytes::from(format!("{}:{}:{}", format, voice_id, text)))
    }
}
