mod aws_translate_client;

pub use aws_translate_client::AwsTranslateClient;
