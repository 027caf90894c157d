use std::path::PathBuf;

use clap::Parser;
use minute_export::export_to_txt;
use minute_pulse::{
    tracing::init_tracing_subscriber, EngineCache, HfInferenceClient, PipelineConfig,
    SummaryOptions, SummaryPipeline,
};

#[derive(Parser)]
#[command(name = "minute-pulse", about = "Meeting transcript summarizer")]
struct Cli {
    /// Path to the transcript file (plain text)
    transcript: PathBuf,

    /// Hugging Face API token
    #[arg(long, env = "HF_API_TOKEN")]
    api_token: String,

    /// Maximum summary length in tokens
    #[arg(long, env = "SUMMARY_MAX_LENGTH", default_value = "150")]
    max_length: usize,

    /// Minimum summary length in tokens
    #[arg(long, env = "SUMMARY_MIN_LENGTH", default_value = "50")]
    min_length: usize,

    /// Token budget for a single summarization call
    #[arg(long, env = "MAX_TOKENS_PER_CHUNK", default_value = "1024")]
    max_tokens: usize,

    /// Write a full report (summary, transcript, statistics) to this path
    /// instead of printing the summary to stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Omit the generation timestamp from the exported report
    #[arg(long)]
    no_timestamp: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let opts = SummaryOptions {
        max_length: cli.max_length,
        min_length: cli.min_length,
    };
    opts.validate()?;

    let config = PipelineConfig {
        max_tokens: cli.max_tokens,
        ..Default::default()
    };
    config.validate()?;

    let transcript = tokio::fs::read_to_string(&cli.transcript).await?;

    let api_token = cli.api_token;
    let engine = EngineCache::new(move || HfInferenceClient::new(api_token.clone()));
    let pipeline = SummaryPipeline::new(engine).with_config(config);

    tracing::info!(transcript = %cli.transcript.display(), "Summarizing transcript");
    let result = pipeline.summarize(&transcript, opts).await;

    if let Some(error) = result.error {
        anyhow::bail!("summarization failed: {error}");
    }

    match cli.output {
        Some(path) => {
            let report = export_to_txt(&transcript, &result.summary, !cli.no_timestamp)?;
            tokio::fs::write(&path, report).await?;
            tracing::info!(path = %path.display(), "Report written");
        }
        None => println!("{}", result.summary),
    }

    Ok(())
}
