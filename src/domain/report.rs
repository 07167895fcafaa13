use super::{AnalyticsCall, Entity, Sentiment, SyntaxToken};

/// Analytics merged across every chunk of a transcript.
///
/// Set-like fields keep first-seen order so rendering is deterministic.
/// Nothing is truncated here; display limits apply when the report is
/// formatted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateReport {
    pub summary: String,
    pub key_phrases: Vec<String>,
    pub entities: Vec<Entity>,
    pub sentiment: Option<Sentiment>,
    pub pii_types: Vec<String>,
    pub languages: Vec<String>,
    pub syntax_tokens: Vec<SyntaxToken>,
    pub chunk_count: usize,
    pub skipped_calls: Vec<(usize, AnalyticsCall)>,
}
