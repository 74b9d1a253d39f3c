//! Tests for driving a single provider test

use std::sync::Arc;
use std::time::Duration;

use llm_speedtest::enums::ai_provider_error::AiProviderError;
use llm_speedtest::errors::BenchError;
use llm_speedtest::services::stream_processor::StreamProcessor;
use llm_speedtest::structs::fragment::Fragment;
use llm_speedtest::structs::usage_info::UsageInfo;

use crate::common::{assert_close, prompt, wait_ms, ScriptedProvider, Step};

#[tokio::test(start_paused = true)]
async fn content_stream_yields_expected_metrics() {
    let provider = ScriptedProvider::new(
        "alpha",
        vec![
            wait_ms(100),
            Step::Emit(Fragment::content("Hi")),
            wait_ms(200),
            Step::Emit(Fragment::content(" there")),
            Step::Emit(Fragment::usage(UsageInfo::new(5, 2, 7))),
        ],
    );

    let mut processor = StreamProcessor::new();
    let result = processor.run(&provider, &prompt()).await.unwrap();

    assert_eq!(result.provider, "alpha");
    assert_close(result.first_token_time.unwrap(), Duration::from_millis(100));
    assert_eq!(result.content_tokens, 2);
    assert_eq!(result.reasoning_tokens, 0);
    assert_eq!(result.total_tokens, 7);
    assert_eq!(result.reasoning_time, Duration::ZERO);
    assert_close(result.content_time, Duration::from_millis(200));
    assert_close(result.total_time, Duration::from_millis(300));
    assert_eq!(processor.accumulator().content_text(), "Hi there");

    let output = processor.output().as_str();
    assert!(output.contains("Testing provider: alpha"));
    assert!(output.contains("Hi there"));
    assert!(output.contains("First token latency: 0.10s"));
    assert!(output.contains("[Usage]"));
    assert!(!output.contains("Reasoning:"));
}

#[tokio::test(start_paused = true)]
async fn reasoning_and_content_phases_are_timed_separately() {
    let provider = ScriptedProvider::new(
        "beta",
        vec![
            wait_ms(50),
            Step::Emit(Fragment::reasoning("Let me")),
            wait_ms(100),
            Step::Emit(Fragment::reasoning(" think.")),
            wait_ms(100),
            Step::Emit(Fragment::content("Answer")),
            wait_ms(300),
            Step::Emit(Fragment::content(".")),
            Step::Emit(Fragment::usage(UsageInfo::new(3, 15, 18).with_reasoning_tokens(10))),
        ],
    );

    let mut processor = StreamProcessor::new();
    let result = processor.run(&provider, &prompt()).await.unwrap();

    assert_eq!(result.reasoning_tokens, 10);
    assert_eq!(result.content_tokens, 5);
    assert_close(result.reasoning_time, Duration::from_millis(100));
    assert_close(result.content_time, Duration::from_millis(300));
    assert!(result.first_token_time.unwrap() + result.reasoning_time <= Duration::from_millis(260));
    assert!(processor.output().as_str().contains("Reasoning: 13 chars, 10 tokens"));
}

#[tokio::test]
async fn unavailable_provider_is_never_opened() {
    let provider = ScriptedProvider::unavailable("gamma");

    let mut processor = StreamProcessor::new();
    let err = processor.run(&provider, &prompt()).await.unwrap_err();

    assert!(matches!(err, BenchError::ProviderUnavailable { ref provider } if provider == "gamma"));
    assert_eq!(provider.opened(), 0);
    assert!(processor.output().as_str().contains("API key not configured"));
}

#[tokio::test]
async fn mid_stream_error_keeps_partial_transcript_but_no_result() {
    let provider = ScriptedProvider::new(
        "delta",
        vec![
            Step::Emit(Fragment::content("partial answ")),
            Step::Fail(AiProviderError::NetworkError("connection reset".to_string())),
            Step::Emit(Fragment::content("never seen")),
        ],
    );

    let mut processor = StreamProcessor::new();
    let err = processor.run(&provider, &prompt()).await.unwrap_err();

    match err {
        BenchError::StreamFailure { provider, reason } => {
            assert_eq!(provider, "delta");
            assert!(reason.contains("connection reset"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    let output = processor.output().as_str();
    assert!(output.contains("partial answ"));
    assert!(!output.contains("never seen"));
    assert!(output.contains("Error while testing provider delta"));
    assert_eq!(processor.accumulator().content_text(), "");
}

#[tokio::test]
async fn failure_to_open_is_a_stream_failure() {
    let provider = Arc::new(
        ScriptedProvider::new("eps", vec![])
            .with_open_error(AiProviderError::AuthenticationError("bad key".to_string())),
    );

    let mut processor = StreamProcessor::new();
    let err = processor.run(provider.as_ref(), &prompt()).await.unwrap_err();

    assert!(err.is_stream_failure());
    assert_eq!(err.provider(), Some("eps"));
    assert_eq!(provider.opened(), 1);
}

#[tokio::test(start_paused = true)]
async fn stream_without_text_or_usage_still_completes() {
    let provider = ScriptedProvider::new("zeta", vec![wait_ms(10), Step::Emit(Fragment::empty())]);

    let mut processor = StreamProcessor::new();
    let result = processor.run(&provider, &prompt()).await.unwrap();

    assert_eq!(result.first_token_time, None);
    assert_eq!(result.total_tokens, 0);
    assert!(processor.output().as_str().contains("No token received."));
}

#[tokio::test(start_paused = true)]
async fn reused_processor_starts_from_scratch() {
    let first = ScriptedProvider::quick("one", 20, "first");
    let second = ScriptedProvider::new("two", vec![wait_ms(40), Step::Emit(Fragment::content("second"))]);

    let mut processor = StreamProcessor::new();
    processor.run(&first, &prompt()).await.unwrap();
    processor.take_output();
    let result = processor.run(&second, &prompt()).await.unwrap();

    assert_eq!(processor.accumulator().content_text(), "second");
    assert_eq!(result.total_tokens, 0);
    assert_close(result.first_token_time.unwrap(), Duration::from_millis(40));
    assert!(!processor.output().as_str().contains("first"));
}
