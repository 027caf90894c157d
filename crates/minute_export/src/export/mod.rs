pub mod text;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("{field} is empty, nothing to export")]
    EmptyField { field: &'static str },
}

/// Rejects export when either side of the report is missing. The returned
/// error names the offending field.
pub fn validate_export_inputs(transcript: &str, summary: &str) -> Result<(), ExportError> {
    if transcript.trim().is_empty() {
        return Err(ExportError::EmptyField {
            field: "transcript",
        });
    }
    if summary.trim().is_empty() {
        return Err(ExportError::EmptyField { field: "summary" });
    }
    Ok(())
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Percentage of the transcript removed by summarization:
/// `(1 - summary_words / transcript_words) * 100`. Zero when the transcript
/// has no words.
pub fn compression_ratio(transcript: &str, summary: &str) -> f64 {
    let transcript_words = word_count(transcript);
    if transcript_words == 0 {
        return 0.0;
    }
    (1.0 - word_count(summary) as f64 / transcript_words as f64) * 100.0
}
