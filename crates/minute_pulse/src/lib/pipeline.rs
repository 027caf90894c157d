//! # Summarization Pipeline
//!
//! Orchestrates transcript summarization: short transcripts are summarized
//! in a single model call, long ones are chunked on sentence boundaries,
//! summarized chunk by chunk and merged in a second pass. Model failures
//! degrade to an extractive first-sentences summary instead of failing the
//! run.

use crate::{
    chunk::{chunk_text, estimate_tokens, first_sentences, word_count},
    llm::{cache::EngineCache, engine::SummaryEngine},
    types::{PipelineConfig, PipelineResult, SummaryOptions},
};

pub struct SummaryPipeline<E: SummaryEngine> {
    engine: EngineCache<E>,
    config: PipelineConfig,
}

impl<E: SummaryEngine> SummaryPipeline<E> {
    pub fn new(engine: EngineCache<E>) -> Self {
        Self {
            engine,
            config: PipelineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn engine_cache(&self) -> &EngineCache<E> {
        &self.engine
    }

    /// Summarizes `text`, never returning an error to the caller: every
    /// exit is a [`PipelineResult`] with exactly one side populated.
    #[tracing::instrument(skip(self, text))]
    pub async fn summarize(&self, text: &str, opts: SummaryOptions) -> PipelineResult {
        let text = text.trim();
        if text.is_empty() {
            tracing::error!("Input text is empty");
            return PipelineResult::failure("input text is empty");
        }

        match self.abstractive(text, opts).await {
            Ok(summary) => PipelineResult::success(summary),
            Err(model_err) => {
                tracing::error!(
                    error = %model_err,
                    "Abstractive summarization failed, attempting extractive fallback"
                );
                let fallback = first_sentences(text, self.config.fallback_sentences);
                if fallback.trim().is_empty() {
                    tracing::error!("Extractive fallback produced no sentences");
                    PipelineResult::failure(model_err.to_string())
                } else {
                    PipelineResult::success(fallback)
                }
            }
        }
    }

    async fn abstractive(&self, text: &str, opts: SummaryOptions) -> Result<String, E::Error> {
        let engine = self.engine.get_or_create();
        let max_tokens = self.config.max_tokens;

        let estimated = estimate_tokens(text);
        if estimated <= max_tokens as f64 {
            tracing::info!("Summarizing transcript in a single pass");
            return engine
                .summarize_chunk(text, opts.max_length, opts.min_length)
                .await;
        }

        tracing::info!(
            estimated = estimated as u64,
            max_tokens,
            "Transcript exceeds token budget, chunking"
        );
        let chunks = chunk_text(text, max_tokens);

        // strictly sequential: the backend is a single shared handle
        let mut partials = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            tracing::info!(chunk = i + 1, total = chunks.len(), "Summarizing chunk");
            let summary = engine
                .summarize_chunk(chunk, opts.max_length, opts.min_length)
                .await?;
            partials.push(summary);
        }

        Ok(merge_summaries(engine.as_ref(), partials, opts.max_length, opts.min_length).await)
    }
}

/// Merges chunk-level summaries into one. Short concatenations are returned
/// as-is; longer ones go through one more engine pass. This pass never fails
/// the pipeline: if the engine errors here, the concatenation is truncated
/// to the first `max_length` words instead.
pub async fn merge_summaries<E: SummaryEngine>(
    engine: &E,
    summaries: Vec<String>,
    max_length: usize,
    min_length: usize,
) -> String {
    if summaries.len() <= 1 {
        return summaries.into_iter().next().unwrap_or_default();
    }

    let combined = summaries.join(" ");
    if word_count(&combined) <= max_length {
        return combined;
    }

    tracing::info!("Running second summarization pass to merge chunk summaries");
    match engine.summarize_chunk(&combined, max_length, min_length).await {
        Ok(merged) => merged,
        Err(err) => {
            tracing::warn!(
                error = %err,
                "Could not merge summaries, returning truncated concatenation"
            );
            combined
                .split_whitespace()
                .take(max_length)
                .collect::<Vec<_>>()
                .join(" ")
        }
    }
}
