mod chunk;
mod error;
mod llm;
mod pipeline;
pub mod tracing;
pub mod types;

pub use chunk::{chunk_text, estimate_tokens, first_sentences, split_sentences, word_count};
pub use error::Error;
pub use llm::{
    cache::EngineCache,
    engine::SummaryEngine,
    hf::{HfError, HfInferenceClient},
};
pub use pipeline::{merge_summaries, SummaryPipeline};
pub use types::{PipelineConfig, PipelineResult, SummaryOptions};
