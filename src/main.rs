use tokio_util::sync::CancellationToken;

use murmur::application::services::PipelineError;
use murmur::infrastructure::aws::load_sdk_config;
use murmur::infrastructure::observability::{TracingConfig, init_tracing, preview_text};
use murmur::presentation::{Adapters, Environment, Settings, build_pipeline, pipeline_request};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        &settings.logging.level,
        settings.logging.enable_json,
    ));

    let sdk_config = load_sdk_config(settings.aws.region.as_deref()).await;
    let adapters = Adapters::aws(&settings, &sdk_config)?;
    let pipeline = build_pipeline(&settings, adapters);
    let request = pipeline_request(&settings);

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Interrupt received, cancelling pipeline");
                cancel.cancel();
            }
        });
    }

    println!("Starting transcription job for {}...", request.media);

    match pipeline.run(&request, &cancel).await {
        Ok(outcome) => {
            println!(
                "Transcription {} completed: {}",
                outcome.job_name,
                preview_text(outcome.transcript.as_str())
            );
            println!(
                "Processing complete. Summary saved to {}",
                outcome.report_location
            );
            for artifact in &outcome.audio_artifacts {
                println!("Translated audio saved to {}", artifact);
            }
            Ok(())
        }
        Err(PipelineError::JobFailed { job_name, status }) => {
            println!("Transcription job {} failed with status: {}", job_name, status);
            std::process::exit(1);
        }
        Err(e) => {
            println!("Processing failed: {}", e);
            Err(e.into())
        }
    }
}
