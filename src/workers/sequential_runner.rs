use std::sync::Arc;
use crate::services::console_sink::ConsoleSink;
use crate::services::stream_processor::StreamProcessor;
use crate::structs::ai::chat_completions::chat_message::ChatMessage;
use crate::structs::test_result::TestResult;
use crate::traits::chat_provider::ChatProvider;

/// Tests providers one at a time, in name order.
pub struct SequentialRunner {
    sink: Arc<ConsoleSink>,
}

impl SequentialRunner {
    pub fn new(sink: Arc<ConsoleSink>) -> Self {
        Self { sink }
    }

    pub async fn run(&self, providers: &[Arc<dyn ChatProvider>], messages: &[ChatMessage]) -> Vec<TestResult> {
        let mut ordered: Vec<&Arc<dyn ChatProvider>> = providers.iter().collect();
        ordered.sort_by(|a, b| a.name().cmp(b.name()));

        log::info!("🚀 Starting sequential test of {} providers", ordered.len());

        let mut results = Vec::with_capacity(ordered.len());
        for provider in ordered {
            let mut processor = StreamProcessor::new();
            let outcome = processor.run(provider.as_ref(), messages).await;
            self.sink.write_block(&processor.take_output());

            match outcome {
                Ok(result) => results.push(result),
                Err(e) => log::error!("❌ Error while testing provider {}: {}", provider.name(), e),
            }
        }

        results
    }
}
