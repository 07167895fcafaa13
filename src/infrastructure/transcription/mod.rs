mod aws_transcribe_service;

pub use aws_transcribe_service::AwsTranscribeService;
