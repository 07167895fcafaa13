use chrono::{TimeZone, Utc};

use murmur::domain::{
    AudioFormat, JobName, JobStatus, MediaFormat, ObjectLocation, Sentiment, Transcript,
    TranscriptError, TranscriptionJob,
};

#[test]
fn given_status_strings_when_parsing_then_round_trips_service_names() {
    for status in [
        JobStatus::Queued,
        JobStatus::InProgress,
        JobStatus::Completed,
        JobStatus::Failed,
    ] {
        assert_eq!(status.as_str().parse::<JobStatus>(), Ok(status));
    }
    assert!("DONE".parse::<JobStatus>().is_err());
}

#[test]
fn given_job_statuses_when_checking_terminal_then_only_completed_and_failed_are() {
    assert!(!JobStatus::Queued.is_terminal());
    assert!(!JobStatus::InProgress.is_terminal());
    assert!(JobStatus::Completed.is_terminal());
    assert!(JobStatus::Failed.is_terminal());
}

#[test]
fn given_submission_time_when_naming_job_then_appends_unix_timestamp() {
    let at = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();

    let name = JobName::from_time("transcription_job", at);

    assert_eq!(name.as_str(), "transcription_job_1700000000");
}

#[test]
fn given_new_job_when_created_then_starts_queued_with_prefixed_name() {
    let job = TranscriptionJob::new(
        "interview",
        ObjectLocation::new("bucket", "a.mp3"),
        MediaFormat::Mp3,
        "en-US".to_string(),
        ObjectLocation::new("bucket", "transcribed.json"),
    );

    assert_eq!(job.status, JobStatus::Queued);
    assert!(!job.status.is_terminal());
    assert_eq!(
        job.name.as_str(),
        format!("interview_{}", job.submitted_at.timestamp())
    );
}

#[test]
fn given_s3_uri_when_parsing_location_then_splits_bucket_and_key() {
    let location = ObjectLocation::from_uri("s3://media/audio/Arthur.mp3").unwrap();

    assert_eq!(location.bucket(), "media");
    assert_eq!(location.key(), "audio/Arthur.mp3");
    assert_eq!(location.to_uri(), "s3://media/audio/Arthur.mp3");
    assert_eq!(location.to_string(), location.to_uri());
    assert_eq!(
        location.with_key("summarized.txt"),
        ObjectLocation::new("media", "summarized.txt")
    );
}

#[test]
fn given_invalid_uri_when_parsing_location_then_returns_none() {
    assert!(ObjectLocation::from_uri("https://media/a.mp3").is_none());
    assert!(ObjectLocation::from_uri("s3://media").is_none());
    assert!(ObjectLocation::from_uri("s3:///a.mp3").is_none());
    assert!(ObjectLocation::from_uri("s3://media/").is_none());
}

#[test]
fn given_transcription_artifact_when_parsing_then_extracts_first_transcript() {
    let artifact = br#"{
        "jobName": "transcription_job_1",
        "status": "COMPLETED",
        "results": {
            "transcripts": [{ "transcript": "Hello there." }, { "transcript": "ignored" }],
            "items": []
        }
    }"#;

    let transcript = Transcript::from_artifact(artifact).unwrap();

    assert_eq!(transcript.as_str(), "Hello there.");
    assert_eq!(transcript.into_inner(), "Hello there.");
}

#[test]
fn given_artifact_without_transcripts_when_parsing_then_reports_missing() {
    let empty = br#"{ "results": { "transcripts": [] } }"#;
    let absent = br#"{ "results": {} }"#;

    assert!(matches!(
        Transcript::from_artifact(empty),
        Err(TranscriptError::Missing)
    ));
    assert!(matches!(
        Transcript::from_artifact(absent),
        Err(TranscriptError::Missing)
    ));
}

#[test]
fn given_non_json_artifact_when_parsing_then_reports_malformed() {
    assert!(matches!(
        Transcript::from_artifact(b"<html>"),
        Err(TranscriptError::Malformed(_))
    ));
    assert!(matches!(
        Transcript::from_artifact(br#"{ "jobName": "x" }"#),
        Err(TranscriptError::Malformed(_))
    ));
}

#[test]
fn given_file_extensions_when_resolving_media_format_then_matches_case_insensitively() {
    assert_eq!(MediaFormat::from_extension("MP3"), Some(MediaFormat::Mp3));
    assert_eq!(MediaFormat::from_extension("m4a"), Some(MediaFormat::Mp4));
    assert_eq!("flac".parse::<MediaFormat>(), Ok(MediaFormat::Flac));
    assert!(MediaFormat::from_extension("txt").is_none());
}

#[test]
fn given_audio_formats_when_describing_then_extension_and_content_type_match() {
    assert_eq!(AudioFormat::Mp3.extension(), "mp3");
    assert_eq!(AudioFormat::Mp3.content_type(), "audio/mpeg");
    assert_eq!(AudioFormat::OggVorbis.as_str(), "ogg_vorbis");
    assert_eq!(AudioFormat::OggVorbis.extension(), "ogg");
    assert_eq!(AudioFormat::Pcm.content_type(), "audio/pcm");
}

#[test]
fn given_sentiment_labels_when_parsing_then_uses_uppercase_names() {
    assert_eq!("MIXED".parse::<Sentiment>(), Ok(Sentiment::Mixed));
    assert_eq!(Sentiment::Negative.to_string(), "NEGATIVE");
    assert!("positive".parse::<Sentiment>().is_err());
}
