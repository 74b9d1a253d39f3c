use std::sync::Arc;

use llm_speedtest::enums::ai_provider_error::AiProviderError;
use llm_speedtest::services::console_sink::ConsoleSink;
use llm_speedtest::structs::fragment::Fragment;
use llm_speedtest::workers::sequential_runner::SequentialRunner;

use crate::common::{prompt, wait_ms, ScriptedProvider, Step};

#[tokio::test(start_paused = true)]
async fn runs_in_name_order() {
    let sink = Arc::new(ConsoleSink::in_memory());
    let providers = vec![
        ScriptedProvider::quick("bravo", 30, "b").shared(),
        ScriptedProvider::quick("alpha", 10, "a").shared(),
        ScriptedProvider::quick("charlie", 20, "c").shared(),
    ];

    let results = SequentialRunner::new(Arc::clone(&sink)).run(&providers, &prompt()).await;

    let names: Vec<&str> = results.iter().map(|r| r.provider.as_str()).collect();
    assert_eq!(names, vec!["alpha", "bravo", "charlie"]);

    let output = sink.contents();
    let alpha = output.find("Testing provider: alpha").unwrap();
    let bravo = output.find("Testing provider: bravo").unwrap();
    let charlie = output.find("Testing provider: charlie").unwrap();
    assert!(alpha < bravo && bravo < charlie);
}

#[tokio::test(start_paused = true)]
async fn failing_provider_is_left_out() {
    let sink = Arc::new(ConsoleSink::in_memory());
    let providers = vec![
        ScriptedProvider::quick("alpha", 10, "ok").shared(),
        ScriptedProvider::new(
            "broken",
            vec![
                wait_ms(10),
                Step::Emit(Fragment::content("half")),
                Step::Fail(AiProviderError::ApiError("overloaded".to_string())),
            ],
        )
        .shared(),
        ScriptedProvider::unavailable("keyless").shared(),
        ScriptedProvider::quick("zulu", 10, "ok").shared(),
    ];

    let results = SequentialRunner::new(Arc::clone(&sink)).run(&providers, &prompt()).await;

    let names: Vec<&str> = results.iter().map(|r| r.provider.as_str()).collect();
    assert_eq!(names, vec!["alpha", "zulu"]);

    let output = sink.contents();
    assert!(output.contains("Error while testing provider broken: API Error: overloaded"));
    assert!(output.contains("half"));
    assert!(output.contains("Skipping provider keyless"));
}

#[tokio::test]
async fn empty_provider_list_gives_empty_results() {
    let sink = Arc::new(ConsoleSink::in_memory());
    let results = SequentialRunner::new(sink).run(&[], &prompt()).await;
    assert!(results.is_empty());
}
