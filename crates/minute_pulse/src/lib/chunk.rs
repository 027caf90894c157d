//! # Transcript Chunker
//!
//! Splits raw transcript text into sentence-aligned chunks that fit a
//! summarization model's input budget. Token counts are estimated as
//! `word_count * 1.3` rather than computed by a real tokenizer; that
//! estimate is the single source of truth for "does it fit" across the
//! pipeline.

use std::sync::LazyLock;

use regex::Regex;

/// Rough token estimation multiplier: 1 word is about 1.3 tokens.
const TOKENS_PER_WORD: f64 = 1.3;

static SENTENCE_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Estimated token count for a text fragment.
pub fn estimate_tokens(text: &str) -> f64 {
    word_count(text) as f64 * TOKENS_PER_WORD
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Splits text into sentences on `.`, `!` or `?` followed by whitespace.
/// The terminating punctuation stays with its sentence; a trailing fragment
/// without terminal punctuation counts as a sentence of its own.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY_RE.find_iter(text) {
        // the punctuation char is one byte, the rest of the match is whitespace
        sentences.push(&text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}

/// Splits `text` into chunks whose estimated token count stays within
/// `max_tokens`, accumulating whole sentences greedily. A single sentence
/// that alone exceeds the budget cannot be deferred and is hard-split into
/// fixed-size word groups instead.
///
/// Empty or whitespace-only input yields an empty chunk list.
#[tracing::instrument(skip(text))]
pub fn chunk_text(text: &str, max_tokens: usize) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let budget = max_tokens as f64;
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_tokens = 0.0;

    for sentence in split_sentences(text) {
        let sentence_tokens = estimate_tokens(sentence);

        if sentence_tokens > budget {
            if !current.is_empty() {
                chunks.push(current.join(" "));
                current.clear();
                current_tokens = 0.0;
            }
            let words: Vec<&str> = sentence.split_whitespace().collect();
            let group_size = ((budget / TOKENS_PER_WORD) as usize).max(1);
            for group in words.chunks(group_size) {
                chunks.push(group.join(" "));
            }
        } else if current_tokens + sentence_tokens > budget {
            // current is non-empty here: the sentence fits a budget on its own
            chunks.push(current.join(" "));
            current = vec![sentence];
            current_tokens = sentence_tokens;
        } else {
            current.push(sentence);
            current_tokens += sentence_tokens;
        }
    }

    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    tracing::info!(count = chunks.len(), "Text chunked");
    chunks
}

/// Extractive summary: the first `n` sentences verbatim, joined by spaces.
/// Used as the degraded path when the abstractive backend is unavailable.
pub fn first_sentences(text: &str, n: usize) -> String {
    split_sentences(text.trim())
        .into_iter()
        .take(n)
        .collect::<Vec<_>>()
        .join(" ")
}
