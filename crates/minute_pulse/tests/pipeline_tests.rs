mod mocks;

use minute_pulse::{
    estimate_tokens, merge_summaries, word_count, EngineCache, PipelineConfig, SummaryOptions,
    SummaryPipeline,
};
use mocks::engine::MockEngine;

fn build_pipeline(engine: MockEngine) -> SummaryPipeline<MockEngine> {
    SummaryPipeline::new(EngineCache::new(move || engine.clone()))
}

// ─── Input validation ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_empty_input_is_rejected_without_model_call() {
    let engine = MockEngine::new("unused");
    let calls = engine.calls.clone();
    let pipeline = build_pipeline(engine);

    for input in ["", "   \n\t  "] {
        let result = pipeline.summarize(input, SummaryOptions::default()).await;

        assert_eq!(result.summary, "");
        let error = result.error.expect("empty input must produce an error");
        assert!(
            error.contains("empty"),
            "error should mention empty input, got: {error}"
        );
    }

    assert!(
        calls.lock().unwrap().is_empty(),
        "no model call should be attempted for empty input"
    );
}

// ─── Direct path ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_short_text_takes_direct_path() {
    let engine = MockEngine::new("A concise summary.");
    let calls = engine.calls.clone();
    let pipeline = build_pipeline(engine);

    let text = "This is a short test text. It has only two sentences.";
    let result = pipeline
        .summarize(
            text,
            SummaryOptions {
                max_length: 50,
                min_length: 10,
            },
        )
        .await;

    assert!(result.is_success(), "got: {:?}", result.error);
    assert_eq!(result.summary, "A concise summary.");

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1, "direct path must use exactly one call");
    assert_eq!(calls[0], text, "direct path must pass the full text through");
}

#[tokio::test]
async fn test_direct_versus_chunked_boundary() {
    // 787 one-word sentences: 787 * 1.3 = 1023.1 tokens, under the budget
    let under = vec!["go."; 787].join(" ");
    let engine = MockEngine::new("summary.");
    let calls = engine.calls.clone();
    let pipeline = build_pipeline(engine);

    pipeline.summarize(&under, SummaryOptions::default()).await;
    assert_eq!(
        calls.lock().unwrap().len(),
        1,
        "text within the budget must never be chunked"
    );

    // 789 words: 1025.7 tokens, just over the budget
    let over = vec!["go."; 789].join(" ");
    let engine = MockEngine::new("summary.");
    let calls = engine.calls.clone();
    let pipeline = build_pipeline(engine);

    pipeline.summarize(&over, SummaryOptions::default()).await;
    assert!(
        calls.lock().unwrap().len() > 1,
        "text over the budget must be chunked"
    );
}

// ─── Chunked path ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_long_text_is_chunked_and_merged() {
    let sentence = "This is a test sentence about artificial intelligence and machine learning.";
    let text = vec![sentence; 100].join(" ");

    let engine = MockEngine::new("Partial summary.");
    let calls = engine.calls.clone();
    let pipeline = build_pipeline(engine);

    let result = pipeline.summarize(&text, SummaryOptions::default()).await;

    assert!(result.is_success(), "got: {:?}", result.error);

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 2, "expected one call per chunk");
    for chunk in calls.iter() {
        assert!(
            estimate_tokens(chunk) <= 1024.0,
            "every chunk sent to the model must fit the budget"
        );
    }

    // two short partials concatenate under max_length, no merge call needed
    assert_eq!(result.summary, "Partial summary. Partial summary.");
}

// ─── Merge pass ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_merge_empty_and_identity() {
    let engine = MockEngine::new("unused");
    let calls = engine.calls.clone();

    assert_eq!(merge_summaries(&engine, vec![], 150, 50).await, "");
    assert_eq!(
        merge_summaries(&engine, vec!["Single summary.".to_string()], 150, 50).await,
        "Single summary."
    );
    assert!(
        calls.lock().unwrap().is_empty(),
        "neither case may invoke the model"
    );
}

#[tokio::test]
async fn test_merge_returns_short_concatenation_as_is() {
    let engine = MockEngine::new("unused");
    let calls = engine.calls.clone();

    let merged = merge_summaries(
        &engine,
        vec!["First part.".to_string(), "Second part.".to_string()],
        150,
        50,
    )
    .await;

    assert_eq!(merged, "First part. Second part.");
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_merge_compresses_long_concatenation() {
    let engine = MockEngine::new("Compressed merge summary.");
    let calls = engine.calls.clone();

    let part = vec!["word"; 80].join(" ");
    let merged = merge_summaries(&engine, vec![part.clone(), part], 100, 20).await;

    assert_eq!(merged, "Compressed merge summary.");
    assert_eq!(
        calls.lock().unwrap().len(),
        1,
        "over-length concatenation requires one second-pass call"
    );
}

#[tokio::test]
async fn test_merge_failure_truncates_instead_of_failing() {
    let engine = MockEngine::failing("model overloaded");

    let part = vec!["word"; 80].join(" ");
    let combined = format!("{part} {part}");
    let merged = merge_summaries(&engine, vec![part.clone(), part], 100, 20).await;

    let expected: String = combined
        .split_whitespace()
        .take(100)
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(merged, expected);
    assert_eq!(word_count(&merged), 100);
}

// ─── Fallback ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_model_failure_falls_back_to_first_sentences() {
    let engine = MockEngine::failing("backend unavailable");
    let pipeline = build_pipeline(engine);

    let text = "First sentence here. Second one follows! Third asks a question? \
                Fourth is skipped. Fifth too.";
    let result = pipeline.summarize(text, SummaryOptions::default()).await;

    assert!(
        result.is_success(),
        "fallback must be a valid result, got: {:?}",
        result.error
    );
    assert_eq!(
        result.summary,
        "First sentence here. Second one follows! Third asks a question?"
    );
}

#[tokio::test]
async fn test_fallback_sentence_count_is_configurable() {
    let engine = MockEngine::failing("backend unavailable");
    let pipeline = build_pipeline(engine).with_config(PipelineConfig {
        fallback_sentences: 1,
        ..Default::default()
    });

    let result = pipeline
        .summarize("Keep this. Drop this. And this.", SummaryOptions::default())
        .await;

    assert_eq!(result.summary, "Keep this.");
    assert!(result.is_success());
}

// ─── End to end ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_standup_transcript_end_to_end() {
    let engine = MockEngine::new(
        "John completed the login feature while Sarah works on the dashboard with no blockers.",
    );
    let pipeline = build_pipeline(engine);

    let text = "Quick standup. John completed the login feature. \
                Sarah is working on the dashboard. No blockers.";
    let result = pipeline
        .summarize(
            text,
            SummaryOptions {
                max_length: 50,
                min_length: 10,
            },
        )
        .await;

    assert!(result.is_success());
    assert!(!result.summary.is_empty());
    assert!(
        word_count(&result.summary) <= 60,
        "summary should stay near max_length, got {} words",
        word_count(&result.summary)
    );
}

// ─── Engine cache ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_engine_cache_survives_across_runs_until_cleared() {
    let engine = MockEngine::new("summary.");
    let pipeline = build_pipeline(engine);

    pipeline
        .summarize("One short sentence.", SummaryOptions::default())
        .await;
    assert!(pipeline.engine_cache().is_loaded());

    pipeline.engine_cache().clear();
    assert!(!pipeline.engine_cache().is_loaded());

    // next run recreates the handle lazily
    pipeline
        .summarize("Another short sentence.", SummaryOptions::default())
        .await;
    assert!(pipeline.engine_cache().is_loaded());
}
