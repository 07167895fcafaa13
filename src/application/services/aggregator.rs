use std::collections::HashSet;
use std::hash::Hash;

use crate::domain::{AggregateReport, ChunkAnalysis};

pub const DEFAULT_SUMMARY_PHRASE_COUNT: usize = 5;

/// Merges per-chunk analytics into a single report. The summary is left
/// empty for the caller to fill in.
pub fn aggregate(analyses: &[ChunkAnalysis]) -> AggregateReport {
    AggregateReport {
        summary: String::new(),
        key_phrases: dedup_preserving_order(
            analyses.iter().flat_map(|a| a.key_phrases.iter().cloned()),
        ),
        entities: analyses
            .iter()
            .flat_map(|a| a.entities.iter().cloned())
            .collect(),
        sentiment: majority_vote(analyses.iter().filter_map(|a| a.sentiment)),
        pii_types: dedup_preserving_order(analyses.iter().flat_map(|a| a.pii_types.iter().cloned())),
        languages: dedup_preserving_order(analyses.iter().filter_map(|a| a.language.clone())),
        syntax_tokens: analyses
            .iter()
            .flat_map(|a| a.syntax_tokens.iter().cloned())
            .collect(),
        chunk_count: analyses.len(),
        skipped_calls: analyses
            .iter()
            .flat_map(|a| a.failed_calls.iter().map(|call| (a.chunk_index, *call)))
            .collect(),
    }
}

/// Keeps the first occurrence of every distinct value.
pub fn dedup_preserving_order<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Most frequent value. Ties go to the value seen first.
pub fn majority_vote<T, I>(votes: I) -> Option<T>
where
    T: Eq + Copy,
    I: IntoIterator<Item = T>,
{
    let mut tally: Vec<(T, usize)> = Vec::new();
    for vote in votes {
        match tally.iter_mut().find(|(value, _)| *value == vote) {
            Some((_, count)) => *count += 1,
            None => tally.push((vote, 1)),
        }
    }

    let max = tally.iter().map(|(_, count)| *count).max()?;
    tally
        .into_iter()
        .find(|(_, count)| *count == max)
        .map(|(value, _)| value)
}

/// The leading key phrases joined into a one-line summary.
pub fn key_phrase_summary(key_phrases: &[String], count: usize) -> String {
    key_phrases
        .iter()
        .take(count)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
