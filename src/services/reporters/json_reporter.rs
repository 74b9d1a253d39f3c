use std::fs;
use std::path::PathBuf;
use chrono::{DateTime, Local};
use serde::Serialize;
use uuid::Uuid;
use crate::config::constants::REPORT_FILE_PREFIX;
use crate::errors::{BenchError, BenchResult};
use crate::structs::test_result::TestResult;
use crate::traits::result_sink::ResultSink;

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    provider: &'a str,
    first_token_secs: Option<f64>,
    reasoning_tokens: u64,
    reasoning_secs: f64,
    reasoning_tokens_per_sec: f64,
    content_tokens: u64,
    content_secs: f64,
    content_tokens_per_sec: f64,
    total_tokens: u64,
    total_secs: f64,
    tokens_per_sec: f64,
}

impl<'a> From<&'a TestResult> for ReportRow<'a> {
    fn from(result: &'a TestResult) -> Self {
        Self {
            provider: &result.provider,
            first_token_secs: result.first_token_time.map(|t| t.as_secs_f64()),
            reasoning_tokens: result.reasoning_tokens,
            reasoning_secs: result.reasoning_time.as_secs_f64(),
            reasoning_tokens_per_sec: result.reasoning_speed(),
            content_tokens: result.content_tokens,
            content_secs: result.content_time.as_secs_f64(),
            content_tokens_per_sec: result.content_speed(),
            total_tokens: result.total_tokens,
            total_secs: result.total_time.as_secs_f64(),
            tokens_per_sec: result.tokens_per_second(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    run_id: Uuid,
    generated_at: DateTime<Local>,
    prompt: &'a str,
    results: Vec<ReportRow<'a>>,
}

/// Writes a one-off JSON report of the current run.
pub struct JsonReporter {
    output_dir: PathBuf,
}

impl JsonReporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn write_report(&self, results: &[TestResult], prompt: &str) -> BenchResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| BenchError::io_error(&format!("creating {}", self.output_dir.display()), &e.to_string()))?;

        let generated_at = Local::now();
        let report = Report {
            run_id: Uuid::new_v4(),
            generated_at,
            prompt,
            results: results.iter().map(ReportRow::from).collect(),
        };

        let file_name = format!(
            "{}_{}_{}.json",
            REPORT_FILE_PREFIX,
            generated_at.format("%Y%m%d_%H%M%S"),
            &report.run_id.simple().to_string()[..8]
        );
        let path = self.output_dir.join(file_name);
        fs::write(&path, serde_json::to_string_pretty(&report)?)?;

        Ok(path)
    }
}

impl ResultSink for JsonReporter {
    fn name(&self) -> &str {
        "json"
    }

    fn publish(&self, results: &[TestResult], prompt: &str) -> BenchResult<()> {
        let path = self.write_report(results, prompt)?;
        log::info!("📄 Report saved to: {}", path.display());
        Ok(())
    }
}
