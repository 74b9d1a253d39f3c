use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use crate::enums::task_state::TaskState;
use crate::errors::BenchError;
use crate::services::console_sink::ConsoleSink;
use crate::services::stream_processor::StreamProcessor;
use crate::structs::ai::chat_completions::chat_message::ChatMessage;
use crate::structs::parallel_test_config::ParallelTestConfig;
use crate::structs::task_report::TaskReport;
use crate::structs::test_result::TestResult;
use crate::traits::chat_provider::ChatProvider;

/// Runs provider tests in parallel on a bounded pool.
///
/// Tasks share nothing but the console sink. Results are sorted by provider
/// name before they are returned, so completion order never leaks out.
pub struct ConcurrentOrchestrator {
    config: ParallelTestConfig,
    sink: Arc<ConsoleSink>,
}

impl ConcurrentOrchestrator {
    pub fn new(config: ParallelTestConfig, sink: Arc<ConsoleSink>) -> Self {
        Self { config, sink }
    }

    pub async fn run(&self, providers: &[Arc<dyn ChatProvider>], messages: &[ChatMessage]) -> Vec<TestResult> {
        self.run_with_reports(providers, messages)
            .await
            .into_iter()
            .filter_map(|report| report.result)
            .collect()
    }

    /// One report per available provider, sorted by provider name.
    pub async fn run_with_reports(&self, providers: &[Arc<dyn ChatProvider>], messages: &[ChatMessage]) -> Vec<TaskReport> {
        let active: Vec<Arc<dyn ChatProvider>> = providers
            .iter()
            .filter(|p| p.is_available())
            .cloned()
            .collect();

        if active.is_empty() {
            log::warn!("⚠️ No providers available");
            self.sink.write_line("\nNo providers available");
            return Vec::new();
        }

        let pool_size = self.config.pool_size(active.len());
        let semaphore = Arc::new(Semaphore::new(pool_size));
        let messages: Arc<[ChatMessage]> = Arc::from(messages.to_vec());

        log::info!(
            "🚀 Starting parallel test of {} providers ({} workers, {}s timeout)",
            active.len(),
            pool_size,
            self.config.timeout.as_secs()
        );

        let mut tasks = JoinSet::new();
        let mut task_names = HashMap::new();
        for provider in active {
            let name = provider.name().to_string();
            let semaphore = Arc::clone(&semaphore);
            let sink = Arc::clone(&self.sink);
            let messages = Arc::clone(&messages);
            let config = self.config;

            let handle = tasks.spawn(async move { run_task(provider, messages, semaphore, sink, config).await });
            task_names.insert(handle.id(), name);
        }

        let mut reports = Vec::new();
        while let Some(joined) = tasks.join_next_with_id().await {
            let report = match joined {
                Ok((_, report)) => report,
                Err(e) => {
                    let provider = task_names
                        .get(&e.id())
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string());
                    log::error!("❌ Test task for {} aborted: {}", provider, e);

                    let mut report = TaskReport::pending(&provider);
                    report.fail(BenchError::StreamFailure {
                        provider,
                        reason: format!("test task aborted: {}", e),
                    });
                    report
                }
            };

            if let Some(error) = &report.error {
                self.sink.write_line(&format!("\nProvider {} test failed: {}", report.provider, error));
            }
            reports.push(report);
        }

        reports.sort_by(|a, b| a.provider.cmp(&b.provider));

        let completed = reports.iter().filter(|r| r.state == TaskState::Completed).count();
        log::info!("✅ Parallel test finished: {}/{} providers completed", completed, reports.len());

        reports
    }
}

async fn run_task(
    provider: Arc<dyn ChatProvider>,
    messages: Arc<[ChatMessage]>,
    semaphore: Arc<Semaphore>,
    sink: Arc<ConsoleSink>,
    config: ParallelTestConfig,
) -> TaskReport {
    let name = provider.name().to_string();
    let mut report = TaskReport::pending(&name);

    let _permit = match semaphore.acquire_owned().await {
        Ok(permit) => permit,
        Err(_) => {
            report.fail(BenchError::StreamFailure {
                provider: name,
                reason: "worker pool closed".to_string(),
            });
            return report;
        }
    };

    report.advance(TaskState::Running);
    sink.write_line(&format!("\nPreparing to test provider: {}", name));
    log::debug!("▶️ {} running", name);

    let mut processor = StreamProcessor::new();
    let outcome = tokio::time::timeout(config.timeout, processor.run(provider.as_ref(), &messages)).await;

    match outcome {
        Ok(Ok(result)) => {
            processor.note(&format!("\nFinished testing provider: {}", name));
            report.complete(result);
        }
        Ok(Err(error)) => {
            processor.note(&format!("\nProvider {} test failed", name));
            report.fail(error);
        }
        Err(_) => {
            log::warn!("⏱️ {} exceeded {}s, abandoning its stream", name, config.timeout.as_secs());
            processor.note(&format!("\nProvider {} timed out after {}s", name, config.timeout.as_secs()));
            report.fail(BenchError::TaskTimeout {
                provider: name,
                timeout: config.timeout,
            });
        }
    }

    sink.write_block(&processor.take_output());
    report
}
