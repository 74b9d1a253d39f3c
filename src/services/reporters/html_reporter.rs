use std::fs;
use std::path::PathBuf;
use chrono::Local;
use crate::errors::{BenchError, BenchResult};
use crate::helpers::report_helper::ReportHelper;
use crate::services::reporters::console_reporter::{ConsoleReporter, HEADERS};
use crate::structs::test_result::TestResult;
use crate::traits::result_sink::ResultSink;

const STYLE: &str = "body { font-family: Arial, sans-serif; margin: 20px; }
    .header { margin-bottom: 20px; }
    table { border-collapse: collapse; width: 100%; }
    th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
    th { background-color: #f2f2f2; }
    tr:nth-child(even) { background-color: #f9f9f9; }
    .metadata { margin: 20px 0; }";

/// Saves a standalone `<stem>.html` page with the prompt and the summary table.
pub struct HtmlReporter {
    output_dir: PathBuf,
    file_stem: String,
}

impl HtmlReporter {
    pub fn new(output_dir: impl Into<PathBuf>, file_stem: &str) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_stem: file_stem.to_string(),
        }
    }

    pub fn render(results: &[TestResult], prompt: &str, generated_at: &str) -> String {
        let mut table = String::from("<table>\n      <thead>\n        <tr>");
        for header in HEADERS {
            table.push_str(&format!("<th>{}</th>", ReportHelper::escape_html(header)));
        }
        table.push_str("</tr>\n      </thead>\n      <tbody>\n");
        for result in results {
            table.push_str("        <tr>");
            for cell in ConsoleReporter::row(result) {
                table.push_str(&format!("<td>{}</td>", ReportHelper::escape_html(&cell)));
            }
            table.push_str("</tr>\n");
        }
        table.push_str("      </tbody>\n    </table>");

        format!(
            "<!DOCTYPE html>
<html>
<head>
  <meta charset=\"utf-8\">
  <title>API Testing Report</title>
  <style>
    {style}
  </style>
</head>
<body>
  <div class=\"header\">
    <h1>API Testing Report</h1>
    <div class=\"metadata\">
      <p><strong>Test Time:</strong> {time}</p>
      <p><strong>Test Message:</strong> {prompt}</p>
    </div>
  </div>
    {table}
</body>
</html>
",
            style = STYLE,
            time = ReportHelper::escape_html(generated_at),
            prompt = ReportHelper::escape_html(prompt),
            table = table,
        )
    }

    pub fn write_report(&self, results: &[TestResult], prompt: &str) -> BenchResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| BenchError::io_error(&format!("creating {}", self.output_dir.display()), &e.to_string()))?;

        let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let path = self.output_dir.join(format!("{}.html", self.file_stem));
        fs::write(&path, Self::render(results, prompt, &generated_at))?;

        Ok(path)
    }
}

impl ResultSink for HtmlReporter {
    fn name(&self) -> &str {
        "html"
    }

    fn publish(&self, results: &[TestResult], prompt: &str) -> BenchResult<()> {
        let path = self.write_report(results, prompt)?;
        log::info!("📄 HTML report saved to: {}", path.display());
        Ok(())
    }
}
