use std::{
    fmt::{Debug, Display},
    future::Future,
};

/// Abstractive summarization backend. Implementations summarize exactly the
/// text they are given in one call; chunking is the pipeline's concern.
pub trait SummaryEngine {
    const SUMMARIZER_MODEL: &str;

    type Error: Debug + Display;

    /// Summarize one model-sized piece of text. `max_length` and
    /// `min_length` are advisory generation bounds in tokens, forwarded to
    /// the model and not enforced post-hoc.
    fn summarize_chunk(
        &self,
        text: &str,
        max_length: usize,
        min_length: usize,
    ) -> impl Future<Output = Result<String, Self::Error>>;
}
