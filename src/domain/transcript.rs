use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript(String);

impl Transcript {
    /// Extracts the first transcript from the JSON artifact written by the
    /// transcription service:
    ///
    /// ```json
    /// { "results": { "transcripts": [{ "transcript": "the text..." }] } }
    /// ```
    pub fn from_artifact(bytes: &[u8]) -> Result<Self, TranscriptError> {
        let artifact: TranscriptArtifact =
            serde_json::from_slice(bytes).map_err(|e| TranscriptError::Malformed(e.to_string()))?;

        artifact
            .results
            .transcripts
            .into_iter()
            .next()
            .map(|entry| Self(entry.transcript))
            .ok_or(TranscriptError::Missing)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Deserialize)]
struct TranscriptArtifact {
    results: TranscriptResults,
}

#[derive(Deserialize)]
struct TranscriptResults {
    #[serde(default)]
    transcripts: Vec<TranscriptEntry>,
}

#[derive(Deserialize)]
struct TranscriptEntry {
    transcript: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("malformed transcript artifact: {0}")]
    Malformed(String),
    #[error("transcript artifact contains no transcripts")]
    Missing,
}
