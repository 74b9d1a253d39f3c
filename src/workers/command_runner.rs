use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use chrono::Local;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::test_mode::TestMode;
use crate::errors::{BenchError, BenchResult, ErrorHandler};
use crate::services::console_sink::ConsoleSink;
use crate::services::provider_registry::ProviderRegistry;
use crate::helpers::report_helper::ReportHelper;
use crate::services::reporters::console_reporter::ConsoleReporter;
use crate::services::reporters::csv_reporter::CsvReporter;
use crate::services::reporters::html_reporter::HtmlReporter;
use crate::services::reporters::json_reporter::JsonReporter;
use crate::structs::ai::chat_completions::chat_message::ChatMessage;
use crate::structs::config::config::Config;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::parallel_test_config::ParallelTestConfig;
use crate::structs::test_result::TestResult;
use crate::traits::chat_provider::ChatProvider;
use crate::traits::result_sink::ResultSink;
use crate::workers::concurrent_orchestrator::ConcurrentOrchestrator;
use crate::workers::sequential_runner::SequentialRunner;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    sink: Arc<ConsoleSink>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            sink: Arc::new(ConsoleSink::stdout()),
            start_time: None,
        }
    }

    pub fn with_sink(mut self, sink: Arc<ConsoleSink>) -> Self {
        self.sink = sink;
        self
    }

    pub async fn run_command(&mut self, command: Commands) -> BenchResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Run { mode, workers, timeout, prompt, output } => {
                self.run_benchmark(mode, workers, timeout, prompt, output).await.map(|_| ())
            }
            Commands::List => self.list_command(),
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        if let Err(e) = &result {
            ErrorHandler::handle_error(e);
        }

        result
    }

    fn load_config(&self) -> BenchResult<Config> {
        let config = ConfigManager::load(self.config_path.as_deref())?;
        if let Err(errors) = ConfigManager::validate_config(&config) {
            return Err(BenchError::config_error(&errors.join("; "), None));
        }
        Ok(config)
    }

    async fn run_benchmark(
        &self,
        mode: Option<TestMode>,
        workers: Option<usize>,
        timeout: Option<u64>,
        prompt: Option<String>,
        output: Option<PathBuf>,
    ) -> BenchResult<Vec<TestResult>> {
        let config = self.load_config()?;

        let mode = mode.unwrap_or(config.run.mode);
        let workers = workers.unwrap_or(config.run.workers);
        let timeout_secs = timeout.unwrap_or(config.run.timeout_secs);
        let prompt = prompt.unwrap_or_else(|| config.run.prompt.clone());

        if workers == 0 {
            return Err(BenchError::config_error("workers must be at least 1", Some("workers")));
        }
        if timeout_secs == 0 {
            return Err(BenchError::config_error("timeout must be at least 1 second", Some("timeout")));
        }

        let messages = vec![ChatMessage::user(prompt.clone())];
        let parallel_config = ParallelTestConfig::new(workers, timeout_secs);

        let started = Instant::now();
        self.sink.write_line(&format!("Test started at: {}", Local::now().format("%Y-%m-%d %H:%M:%S %Z")));
        self.sink.write_line(&format!("Test mode: {}", mode));
        if mode == TestMode::Multi {
            self.sink.write_line(&format!("Parallel workers: {}", workers));
            self.sink.write_line(&format!("Per-test timeout: {}s", timeout_secs));
        }
        self.sink.write_line(&format!("Prompt: {}", prompt));

        let providers = ProviderRegistry::initialize(ProviderRegistry::build(&config.providers), &self.sink)?;
        let results = Self::execute(&providers, &messages, mode, parallel_config, Arc::clone(&self.sink)).await;

        let report_dir = config.output.report_dir(output);
        let sinks = Self::result_sinks(Arc::clone(&self.sink), &config.output, report_dir);
        Self::publish_results(&sinks, &results, &prompt);

        self.sink.write_line(&format!(
            "\nAll tests finished, total time: {:.2}s",
            started.elapsed().as_secs_f64()
        ));

        Ok(results)
    }

    /// Runs the selected mode; failed providers are simply absent.
    pub async fn execute(
        providers: &[Arc<dyn ChatProvider>],
        messages: &[ChatMessage],
        mode: TestMode,
        parallel_config: ParallelTestConfig,
        sink: Arc<ConsoleSink>,
    ) -> Vec<TestResult> {
        match mode {
            TestMode::Seq => {
                sink.write_line("\nStarting sequential test...");
                SequentialRunner::new(sink).run(providers, messages).await
            }
            TestMode::Multi => {
                sink.write_line("\nStarting parallel test...");
                ConcurrentOrchestrator::new(parallel_config, sink).run(providers, messages).await
            }
        }
    }

    /// The console table plus every file report enabled in `output`.
    pub fn result_sinks(sink: Arc<ConsoleSink>, output: &OutputConfig, report_dir: PathBuf) -> Vec<Box<dyn ResultSink>> {
        let file_stem = ReportHelper::file_stem(&Local::now());
        let mut sinks: Vec<Box<dyn ResultSink>> = vec![Box::new(ConsoleReporter::new(sink))];

        if output.csv_report {
            sinks.push(Box::new(CsvReporter::new(&report_dir, &file_stem)));
        }
        if output.html_report {
            sinks.push(Box::new(HtmlReporter::new(&report_dir, &file_stem)));
        }
        if output.json_report {
            sinks.push(Box::new(JsonReporter::new(report_dir)));
        }
        sinks
    }

    /// Hands the results to every sink; one failing sink does not stop the others.
    pub fn publish_results(sinks: &[Box<dyn ResultSink>], results: &[TestResult], prompt: &str) -> usize {
        let mut failures = 0;
        for sink in sinks {
            if let Err(e) = sink.publish(results, prompt) {
                failures += 1;
                log::error!("❌ Result sink '{}' failed: {}", sink.name(), e);
            }
        }
        failures
    }

    fn list_command(&self) -> BenchResult<()> {
        let config = ConfigManager::load(self.config_path.as_deref())?;
        let providers = ProviderRegistry::build(&config.providers);

        let mut block = String::from("Configured providers:\n");
        for provider in &providers {
            let status = if provider.is_available() { "✅ ready" } else { "⛔ missing API key" };
            block.push_str(&format!(
                "  {} [{}] {} ({})\n",
                provider.name(),
                status,
                provider.base_url(),
                if provider.model().is_empty() { "<no model>" } else { provider.model() },
            ));
        }
        let disabled = config.providers.iter().filter(|p| !p.enabled).count();
        if disabled > 0 {
            block.push_str(&format!("  ({} disabled)\n", disabled));
        }
        self.sink.write_block(&block);
        Ok(())
    }

    fn init_command(&self) -> BenchResult<()> {
        log::info!("🚀 Initializing llm-speedtest configuration...");
        let path = self.config_path.clone().unwrap_or_else(ConfigManager::default_config_path);
        ConfigManager::create_sample_config(&path)?;
        log::info!("📝 Set the API key environment variables named in the file, or put them in .env");
        Ok(())
    }

    fn validate_command(&self) -> BenchResult<()> {
        let config = ConfigManager::load(self.config_path.as_deref())?;
        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                self.sink.write_line(&format!("✅ Configuration is valid ({} providers)", config.providers.len()));
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    self.sink.write_line(&format!("❌ {}", error));
                }
                Err(BenchError::config_error(&format!("{} problem(s) found", errors.len()), None))
            }
        }
    }
}
