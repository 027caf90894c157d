use serde::Serialize;

use crate::error::Error;

/// Terminal outcome of a pipeline run. Exactly one side is populated:
/// a successful run carries a non-empty summary and no error, a failed run
/// carries an empty summary and the error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineResult {
    pub summary: String,
    pub error: Option<String>,
}

impl PipelineResult {
    pub fn success(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            summary: String::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Advisory generation bounds, in tokens, passed through to the model.
#[derive(Debug, Clone, Copy)]
pub struct SummaryOptions {
    pub max_length: usize,
    pub min_length: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            max_length: 150,
            min_length: 50,
        }
    }
}

impl SummaryOptions {
    pub fn validate(&self) -> Result<(), Error> {
        if self.min_length >= self.max_length {
            return Err(Error::Validation(format!(
                "min_length ({}) must be less than max_length ({})",
                self.min_length, self.max_length
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    /// Token budget for a single summarization call.
    pub max_tokens: usize,
    /// Number of leading sentences the extractive fallback keeps.
    pub fallback_sentences: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_tokens: 1024,
            fallback_sentences: 3,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_tokens == 0 {
            return Err(Error::Validation("max_tokens must be at least 1".into()));
        }
        if self.fallback_sentences == 0 {
            return Err(Error::Validation(
                "fallback_sentences must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
