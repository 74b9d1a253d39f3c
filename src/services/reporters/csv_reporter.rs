use std::fs;
use std::path::PathBuf;
use crate::errors::{BenchError, BenchResult};
use crate::services::reporters::console_reporter::{ConsoleReporter, HEADERS};
use crate::structs::test_result::TestResult;
use crate::traits::result_sink::ResultSink;

/// Saves the summary table as `<stem>.csv`, one row per result.
pub struct CsvReporter {
    output_dir: PathBuf,
    file_stem: String,
}

impl CsvReporter {
    pub fn new(output_dir: impl Into<PathBuf>, file_stem: &str) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_stem: file_stem.to_string(),
        }
    }

    pub fn write_report(&self, results: &[TestResult]) -> BenchResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| BenchError::io_error(&format!("creating {}", self.output_dir.display()), &e.to_string()))?;

        let path = self.output_dir.join(format!("{}.csv", self.file_stem));
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(HEADERS)?;
        for result in results {
            writer.write_record(ConsoleReporter::row(result))?;
        }
        writer.flush()?;

        Ok(path)
    }
}

impl ResultSink for CsvReporter {
    fn name(&self) -> &str {
        "csv"
    }

    fn publish(&self, results: &[TestResult], _prompt: &str) -> BenchResult<()> {
        let path = self.write_report(results)?;
        log::info!("📄 CSV report saved to: {}", path.display());
        Ok(())
    }
}
