use serde::Deserialize;

use crate::domain::Chunk;

/// Where a chunk is allowed to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkBoundary {
    /// Exactly at the size limit, even mid-word.
    #[default]
    Fixed,
    /// Just after the last whitespace inside the window, falling back to the
    /// size limit when the window has none.
    Whitespace,
}

pub fn split_text(
    text: &str,
    max_chars: usize,
    boundary: ChunkBoundary,
) -> Result<Vec<Chunk>, ChunkingError> {
    match boundary {
        ChunkBoundary::Fixed => split_fixed(text, max_chars),
        ChunkBoundary::Whitespace => split_at_whitespace(text, max_chars),
    }
}

/// Splits `text` into consecutive chunks of `max_chars` characters; only the
/// last chunk may be shorter. Concatenating the chunks yields `text`.
pub fn split_fixed(text: &str, max_chars: usize) -> Result<Vec<Chunk>, ChunkingError> {
    if max_chars == 0 {
        return Err(ChunkingError::ZeroLimit);
    }

    let bounds = char_boundaries(text);
    let total_chars = bounds.len() - 1;

    let chunks = (0..total_chars)
        .step_by(max_chars)
        .enumerate()
        .map(|(index, start)| {
            let end = (start + max_chars).min(total_chars);
            Chunk::new(index, text[bounds[start]..bounds[end]].to_string(), start)
        })
        .collect();

    Ok(chunks)
}

pub fn split_at_whitespace(text: &str, max_chars: usize) -> Result<Vec<Chunk>, ChunkingError> {
    if max_chars == 0 {
        return Err(ChunkingError::ZeroLimit);
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let total_chars = chars.len();
    let byte_at = |pos: usize| chars.get(pos).map(|(b, _)| *b).unwrap_or(text.len());

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < total_chars {
        let mut end = (start + max_chars).min(total_chars);

        if end < total_chars {
            if let Some(ws) = (start..end).rev().find(|&pos| chars[pos].1.is_whitespace()) {
                end = ws + 1;
            }
        }

        chunks.push(Chunk::new(
            chunks.len(),
            text[byte_at(start)..byte_at(end)].to_string(),
            start,
        ));
        start = end;
    }

    Ok(chunks)
}

fn char_boundaries(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ChunkingError {
    #[error("chunk size limit must be greater than zero")]
    ZeroLimit,
}
