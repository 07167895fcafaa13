mod helpers;

use std::sync::Arc;

use bytes::Bytes;

use murmur::application::ports::{ObjectStorage, TranslationError, Translator};
use murmur::application::services::{
    ChunkBoundary, ResynthesisError, ResynthesisOptions, ResynthesisService, audio_artifact_key,
};
use murmur::domain::{AudioFormat, ObjectLocation};
use murmur::infrastructure::storage::InMemoryObjectStorage;

use helpers::{RecordingSynthesizer, RecordingTranslator};

const BUCKET: &str = "media-bucket";

fn options(translation_chunk_size: usize, synthesis_chunk_size: usize) -> ResynthesisOptions {
    ResynthesisOptions {
        target_language: "es".to_string(),
        translation_chunk_size,
        synthesis_chunk_size,
        chunk_boundary: ChunkBoundary::Whitespace,
        voice_id: "Lucia".to_string(),
        audio_format: AudioFormat::Mp3,
        output_prefix: "translated_audio".to_string(),
    }
}

#[test]
fn given_prefix_and_index_when_building_artifact_key_then_uses_format_extension() {
    assert_eq!(
        audio_artifact_key("translated_audio", 0, AudioFormat::Mp3),
        "translated_audio_0.mp3"
    );
    assert_eq!(
        audio_artifact_key("out/speech", 3, AudioFormat::OggVorbis),
        "out/speech_3.ogg"
    );
}

#[tokio::test]
async fn given_transcript_when_resynthesizing_then_stores_one_artifact_per_speech_chunk() {
    let translator = Arc::new(RecordingTranslator::default());
    let synthesizer = Arc::new(RecordingSynthesizer::default());
    let storage = Arc::new(InMemoryObjectStorage::new());
    let service = ResynthesisService::new(
        translator.clone(),
        synthesizer.clone(),
        storage.clone(),
        options(10, 12),
    );

    let output = service
        .run("hello world again and again", "en", BUCKET)
        .await
        .unwrap();

    assert_eq!(output.translated_text, "HELLO WORLD AGAIN AND AGAIN");
    assert_eq!(
        synthesizer.texts(),
        vec!["HELLO WORLD ", "AGAIN AND ", "AGAIN"]
    );
    let keys: Vec<&str> = output.artifacts.iter().map(|a| a.key()).collect();
    assert_eq!(
        keys,
        vec![
            "translated_audio_0.mp3",
            "translated_audio_1.mp3",
            "translated_audio_2.mp3"
        ]
    );

    let first = storage.get(&output.artifacts[0]).await.unwrap();
    assert_eq!(first, Bytes::from("mp3:Lucia:HELLO WORLD "));
    assert_eq!(
        storage.content_type(&output.artifacts[0]).await.unwrap(),
        Some("audio/mpeg".to_string())
    );
}

#[tokio::test]
async fn given_long_transcript_when_translating_then_each_request_respects_chunk_size() {
    let translator = Arc::new(RecordingTranslator::default());
    let service = ResynthesisService::new(
        translator.clone(),
        Arc::new(RecordingSynthesizer::default()),
        Arc::new(InMemoryObjectStorage::new()),
        options(10, 1500),
    );

    service
        .run("hello world again and again", "fr", BUCKET)
        .await
        .unwrap();

    let requests = translator.requests();
    assert_eq!(requests.len(), 4);
    for (text, source, target) in &requests {
        assert!(text.chars().count() <= 10);
        assert_eq!(source, "fr");
        assert_eq!(target, "es");
    }
    let rejoined: String = requests.iter().map(|(text, _, _)| text.as_str()).collect();
    assert_eq!(rejoined, "hello world again and again");
}

#[tokio::test]
async fn given_synthesis_failure_when_resynthesizing_then_reports_failing_chunk() {
    let storage = Arc::new(InMemoryObjectStorage::new());
    let service = ResynthesisService::new(
        Arc::new(RecordingTranslator::default()),
        Arc::new(RecordingSynthesizer::failing_on(1)),
        storage.clone(),
        options(10, 12),
    );

    let error = service
        .run("hello world again and again", "en", BUCKET)
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ResynthesisError::Synthesis { chunk_index: 1, .. }
    ));
    let first = ObjectLocation::new(BUCKET, "translated_audio_0.mp3");
    let second = ObjectLocation::new(BUCKET, "translated_audio_1.mp3");
    assert!(storage.get(&first).await.is_ok());
    assert!(storage.get(&second).await.is_err());
}

#[tokio::test]
async fn given_zero_chunk_size_when_resynthesizing_then_returns_chunking_error() {
    let service = ResynthesisService::new(
        Arc::new(RecordingTranslator::default()),
        Arc::new(RecordingSynthesizer::default()),
        Arc::new(InMemoryObjectStorage::new()),
        options(0, 12),
    );

    let error = service.run("hello", "en", BUCKET).await.unwrap_err();

    assert!(matches!(error, ResynthesisError::Chunking(_)));
}

struct PassthroughTranslator;

#[async_trait::async_trait]
impl Translator for PassthroughTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_language: &str,
        _target_language: &str,
    ) -> Result<String, TranslationError> {
        Ok(text.to_string())
    }
}

#[tokio::test]
async fn given_mid_word_chunk_cuts_when_translating_then_parts_are_concatenated_unchanged() {
    let synthesizer = Arc::new(RecordingSynthesizer::default());
    let service = ResynthesisService::new(
        Arc::new(PassthroughTranslator),
        synthesizer.clone(),
        Arc::new(InMemoryObjectStorage::new()),
        ResynthesisOptions {
            chunk_boundary: ChunkBoundary::Fixed,
            ..options(3, 1500)
        },
    );

    let output = service.run("Hello Paris", "en", BUCKET).await.unwrap();

    assert_eq!(output.translated_text, "Hello Paris");
    assert_eq!(synthesizer.texts(), vec!["Hello Paris"]);
}
