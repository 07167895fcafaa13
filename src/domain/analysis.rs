use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entity {
    pub text: String,
    pub entity_type: String,
}

impl Entity {
    pub fn new(text: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entity_type: entity_type.into(),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.text, self.entity_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxToken {
    pub text: String,
    pub part_of_speech: String,
}

impl SyntaxToken {
    pub fn new(text: impl Into<String>, part_of_speech: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            part_of_speech: part_of_speech.into(),
        }
    }
}

impl fmt::Display for SyntaxToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.text, self.part_of_speech)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectedLanguage {
    pub code: String,
    pub score: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Negative => "NEGATIVE",
            Sentiment::Neutral => "NEUTRAL",
            Sentiment::Mixed => "MIXED",
        }
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POSITIVE" => Ok(Sentiment::Positive),
            "NEGATIVE" => Ok(Sentiment::Negative),
            "NEUTRAL" => Ok(Sentiment::Neutral),
            "MIXED" => Ok(Sentiment::Mixed),
            _ => Err(format!("Invalid sentiment: {}", s)),
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The individual text analytics calls made for every chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyticsCall {
    DominantLanguage,
    KeyPhrases,
    Entities,
    Sentiment,
    PiiEntities,
    Syntax,
}

impl AnalyticsCall {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsCall::DominantLanguage => "dominant_language",
            AnalyticsCall::KeyPhrases => "key_phrases",
            AnalyticsCall::Entities => "entities",
            AnalyticsCall::Sentiment => "sentiment",
            AnalyticsCall::PiiEntities => "pii_entities",
            AnalyticsCall::Syntax => "syntax",
        }
    }
}

impl fmt::Display for AnalyticsCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the analytics calls returned for a single chunk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkAnalysis {
    pub chunk_index: usize,
    pub language: Option<String>,
    pub key_phrases: Vec<String>,
    pub entities: Vec<Entity>,
    pub sentiment: Option<Sentiment>,
    pub pii_types: Vec<String>,
    pub syntax_tokens: Vec<SyntaxToken>,
    pub failed_calls: Vec<AnalyticsCall>,
}

impl ChunkAnalysis {
    pub fn new(chunk_index: usize) -> Self {
        Self {
            chunk_index,
            ..Self::default()
        }
    }
}
