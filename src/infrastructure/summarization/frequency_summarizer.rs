use std::collections::HashMap;

use async_trait::async_trait;
use unicode_segmentation::UnicodeSegmentation;

use crate::application::ports::{Summarizer, SummarizerError};

const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "but", "by", "can", "could", "did", "do", "does", "for", "from", "had", "has", "have", "he",
    "her", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "just", "me", "my",
    "no", "not", "of", "on", "or", "our", "out", "she", "so", "than", "that", "the", "their",
    "them", "then", "there", "these", "they", "this", "to", "up", "us", "was", "we", "were",
    "what", "when", "which", "who", "will", "with", "would", "you", "your",
];

/// Extractive summary: scores each sentence by the average corpus frequency
/// of its content words and keeps the best `sentence_count` sentences in
/// their original order.
pub struct FrequencySummarizer {
    sentence_count: usize,
}

impl FrequencySummarizer {
    pub fn new(sentence_count: usize) -> Self {
        Self {
            sentence_count: sentence_count.max(1),
        }
    }

    fn content_words(sentence: &str) -> impl Iterator<Item = String> + '_ {
        sentence
            .unicode_words()
            .map(str::to_lowercase)
            .filter(|w| !STOP_WORDS.contains(&w.as_str()))
    }
}

#[async_trait]
impl Summarizer for FrequencySummarizer {
    async fn summarize(&self, text: &str) -> Result<String, SummarizerError> {
        let sentences: Vec<&str> = text
            .unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if sentences.len() <= self.sentence_count {
            return Ok(sentences.join(" "));
        }

        let mut frequencies: HashMap<String, usize> = HashMap::new();
        for sentence in &sentences {
            for word in Self::content_words(sentence) {
                *frequencies.entry(word).or_insert(0) += 1;
            }
        }

        let peak = frequencies.values().copied().max().unwrap_or(1) as f64;

        let mut scored: Vec<(usize, f64)> = sentences
            .iter()
            .enumerate()
            .map(|(idx, sentence)| {
                let words: Vec<String> = Self::content_words(sentence).collect();
                let score = if words.is_empty() {
                    0.0
                } else {
                    words
                        .iter()
                        .map(|w| frequencies.get(w).copied().unwrap_or(0) as f64 / peak)
                        .sum::<f64>()
                        / words.len() as f64
                };
                (idx, score)
            })
            .collect();

        // Highest score first; earlier sentences win ties.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut selected: Vec<usize> = scored
            .into_iter()
            .take(self.sentence_count)
            .map(|(idx, _)| idx)
            .collect();
        selected.sort_unstable();

        Ok(selected
            .into_iter()
            .map(|idx| sentences[idx])
            .collect::<Vec<_>>()
            .join(" "))
    }
}
