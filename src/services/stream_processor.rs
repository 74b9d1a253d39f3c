use std::time::Duration;
use futures::StreamExt;
use tokio::time::Instant;
use crate::enums::ai_provider_error::AiProviderError;
use crate::errors::{BenchError, BenchResult};
use crate::services::metrics_accumulator::{MetricsAccumulator, Phase};
use crate::structs::ai::chat_completions::chat_message::ChatMessage;
use crate::structs::output_buffer::OutputBuffer;
use crate::structs::test_result::{rate, TestResult};
use crate::traits::chat_provider::ChatProvider;

const SECTION_RULE: &str = "---------------------------";
const RESULT_RULE: &str = "***************************";

/// Runs a single provider test and narrates it into a private buffer.
///
/// A processor is owned by exactly one task. Its buffer is never written to
/// the console here; whoever drives the processor flushes it.
#[derive(Debug, Default)]
pub struct StreamProcessor {
    accumulator: MetricsAccumulator,
    output: OutputBuffer,
}

impl StreamProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn run(&mut self, provider: &dyn ChatProvider, messages: &[ChatMessage]) -> BenchResult<TestResult> {
        let name = provider.name().to_string();

        self.output.println("");
        self.output.println(SECTION_RULE);
        self.output.printf(format_args!("Testing provider: {}", name));
        self.output.println(SECTION_RULE);
        self.output.println("");

        if !provider.is_available() {
            let error = BenchError::ProviderUnavailable { provider: name };
            self.output.printf(format_args!("{}", error.user_message()));
            return Err(error);
        }

        self.accumulator.reset();
        let start = Instant::now();

        match self.consume(provider, messages, start).await {
            Ok(()) => {
                let total_time = start.elapsed();
                let result = self.accumulator.finalize(&name, total_time);
                self.print_results(&name, total_time);
                log::debug!("📊 {} finished in {:.2}s", name, total_time.as_secs_f64());
                Ok(result)
            }
            Err(cause) => {
                self.accumulator.reset();
                let error = BenchError::stream_failure(&name, &cause);
                self.output.println("");
                self.output.printf(format_args!("Error while testing provider {}: {}", name, cause));
                self.output.println("");
                self.output.println(SECTION_RULE);
                Err(error)
            }
        }
    }

    async fn consume(&mut self, provider: &dyn ChatProvider, messages: &[ChatMessage], start: Instant) -> Result<(), AiProviderError> {
        let mut stream = provider.open_stream(messages).await?;

        while let Some(item) = stream.next().await {
            let fragment = item?;
            let elapsed = start.elapsed();

            match self.accumulator.observe(&fragment, elapsed) {
                Some(Phase::Reasoning) => self.output.print(fragment.reasoning_text().unwrap_or_default()),
                Some(Phase::Content) => self.output.print(fragment.content_text().unwrap_or_default()),
                None => {}
            }
        }

        Ok(())
    }

    fn print_results(&mut self, name: &str, total_time: Duration) {
        let acc = &self.accumulator;
        let out = &mut self.output;

        if let Some(usage) = acc.last_usage() {
            out.println("\n");
            out.println("[Usage]");
            out.printf(format_args!("{}", usage));
        }

        out.println("\n");
        out.printf(format_args!("[{}]", name));

        match acc.first_token_time() {
            Some(first) => out.printf(format_args!("First token latency: {:.2}s", first.as_secs_f64())),
            None => out.println("No token received."),
        }

        if acc.reasoning_tokens() > 0 {
            let reasoning_time = acc.reasoning_time();
            let content_time = acc.content_time();
            out.printf(format_args!(
                "Reasoning: {} chars, {} tokens, time: {:.2}s, speed: {:.2} tokens/s",
                acc.reasoning_text().chars().count(),
                acc.reasoning_tokens(),
                reasoning_time.as_secs_f64(),
                rate(acc.reasoning_tokens(), reasoning_time),
            ));
            out.printf(format_args!(
                "Content: {} chars, {} tokens, time: {:.2}s, speed: {:.2} tokens/s",
                acc.content_text().chars().count(),
                acc.content_tokens(),
                content_time.as_secs_f64(),
                rate(acc.content_tokens(), content_time),
            ));
        }

        out.printf(format_args!(
            "Generated: {} chars, {} tokens, total time: {:.2}s, speed: {:.2} tokens/s",
            acc.reasoning_text().chars().count() + acc.content_text().chars().count(),
            acc.completion_tokens(),
            total_time.as_secs_f64(),
            rate(acc.completion_tokens(), total_time),
        ));
        out.println("");
        out.println(RESULT_RULE);
        out.println("");
    }

    /// Appends a line to this task's narration.
    pub fn note(&mut self, line: &str) {
        self.output.println(line);
    }

    pub fn accumulator(&self) -> &MetricsAccumulator {
        &self.accumulator
    }

    pub fn output(&self) -> &OutputBuffer {
        &self.output
    }

    pub fn take_output(&mut self) -> String {
        self.output.take()
    }
}
