use std::sync::{Arc, Mutex};

use minute_pulse::SummaryEngine;

#[derive(Clone)]
pub struct MockEngine {
    pub summary: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockEngine {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            summary: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl SummaryEngine for MockEngine {
    const SUMMARIZER_MODEL: &str = "mock-bart";

    type Error = anyhow::Error;

    async fn summarize_chunk(
        &self,
        text: &str,
        _max_length: usize,
        _min_length: usize,
    ) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push(text.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.summary.clone())
    }
}
