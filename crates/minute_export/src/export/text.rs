use chrono::Local;

use crate::export::{compression_ratio, validate_export_inputs, word_count, ExportError};

const RULE_WIDTH: usize = 80;
const TIMESTAMP_FORMAT: &str = "%B %d, %Y at %I:%M %p";

/// Renders the plain-text report: summary, full transcript and word-count
/// statistics under a titled header.
pub fn format_content(transcript: &str, summary: &str, include_timestamp: bool) -> String {
    let heavy_rule = "=".repeat(RULE_WIDTH);
    let light_rule = "-".repeat(RULE_WIDTH);

    let mut lines = vec![
        heavy_rule.clone(),
        "MEETING SUMMARY REPORT".to_string(),
        heavy_rule.clone(),
        String::new(),
    ];

    if include_timestamp {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        lines.push(format!("Generated on: {timestamp}"));
        lines.push(String::new());
    }

    lines.extend([
        light_rule.clone(),
        "EXECUTIVE SUMMARY".to_string(),
        light_rule.clone(),
        String::new(),
        summary.to_string(),
        String::new(),
        light_rule.clone(),
        "FULL TRANSCRIPT".to_string(),
        light_rule.clone(),
        String::new(),
        transcript.to_string(),
        String::new(),
        light_rule.clone(),
        "STATISTICS".to_string(),
        light_rule,
        format!("Transcript Word Count: {}", word_count(transcript)),
        format!("Summary Word Count: {}", word_count(summary)),
        format!(
            "Compression Ratio: {:.1}%",
            compression_ratio(transcript, summary)
        ),
        String::new(),
        heavy_rule,
    ]);

    lines.join("\n")
}

/// Validates the inputs and renders the report as UTF-8 bytes, ready to be
/// written to disk or served as a download.
pub fn export_to_txt(
    transcript: &str,
    summary: &str,
    include_timestamp: bool,
) -> Result<Vec<u8>, ExportError> {
    validate_export_inputs(transcript, summary)?;

    let content = format_content(transcript, summary, include_timestamp);
    tracing::info!(bytes = content.len(), "TXT report created");

    Ok(content.into_bytes())
}
