use reqwest::Client;
use serde::Deserialize;

use crate::SummaryEngine;

/// Client for a hosted Hugging Face style inference endpoint running an
/// abstractive summarization model.
pub struct HfInferenceClient {
    client: Client,
    api_token: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum HfError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Model returned no summary")]
    EmptyResponse,
}

impl HfInferenceClient {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_token: api_token.into(),
            base_url: "https://api-inference.huggingface.co".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub async fn send_summarization_request(
        &self,
        text: impl Into<String>,
        max_length: usize,
        min_length: usize,
    ) -> Result<Vec<SummaryOutput>, HfError> {
        let body = serde_json::json!({
            "inputs": text.into(),
            "parameters": {
                "max_length": max_length,
                "min_length": min_length,
                "do_sample": false
            },
            "options": {
                "wait_for_model": true
            }
        });

        let resp = self
            .client
            .post(format!(
                "{}/models/{}",
                self.base_url,
                Self::SUMMARIZER_MODEL
            ))
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(HfError::Api { status, message });
        }

        Ok(resp.json::<Vec<SummaryOutput>>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct SummaryOutput {
    pub summary_text: String,
}

impl SummaryEngine for HfInferenceClient {
    const SUMMARIZER_MODEL: &str = "facebook/bart-large-cnn";

    type Error = HfError;

    async fn summarize_chunk(
        &self,
        text: &str,
        max_length: usize,
        min_length: usize,
    ) -> Result<String, Self::Error> {
        let outputs = self
            .send_summarization_request(text, max_length, min_length)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize chunk"))?;

        outputs
            .into_iter()
            .next()
            .map(|output| output.summary_text)
            .ok_or(HfError::EmptyResponse)
    }
}
