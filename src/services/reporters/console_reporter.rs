use std::sync::Arc;
use crate::errors::BenchResult;
use crate::services::console_sink::ConsoleSink;
use crate::structs::test_result::TestResult;
use crate::traits::result_sink::ResultSink;

pub const HEADERS: [&str; 9] = [
    "Provider",
    "First Token (s)",
    "Reasoning Tokens",
    "Reasoning Time (s)",
    "Content Tokens",
    "Content Time (s)",
    "Total Tokens",
    "Total Time (s)",
    "Tokens/s",
];

/// Prints the summary table to the shared console.
pub struct ConsoleReporter {
    sink: Arc<ConsoleSink>,
}

impl ConsoleReporter {
    pub fn new(sink: Arc<ConsoleSink>) -> Self {
        Self { sink }
    }

    pub fn row(result: &TestResult) -> Vec<String> {
        let has_reasoning = result.reasoning_tokens > 0;
        let has_content = result.content_tokens > 0;

        vec![
            result.provider.clone(),
            result
                .first_token_time
                .map(|t| format!("{:.2}", t.as_secs_f64()))
                .unwrap_or_else(|| "-".to_string()),
            if has_reasoning { result.reasoning_tokens.to_string() } else { "-".to_string() },
            if has_reasoning { format!("{:.2}", result.reasoning_time.as_secs_f64()) } else { "-".to_string() },
            if has_content { result.content_tokens.to_string() } else { "-".to_string() },
            if has_content { format!("{:.2}", result.content_time.as_secs_f64()) } else { "-".to_string() },
            result.total_tokens.to_string(),
            format!("{:.2}", result.total_time.as_secs_f64()),
            if result.total_time.is_zero() { "-".to_string() } else { format!("{:.2}", result.tokens_per_second()) },
        ]
    }

    pub fn render_table(results: &[TestResult]) -> String {
        let rows: Vec<Vec<String>> = results.iter().map(Self::row).collect();

        let widths: Vec<usize> = HEADERS
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rows.iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let rule = |fill: char| -> String {
            let mut line = String::from("+");
            for width in &widths {
                line.push_str(&fill.to_string().repeat(width + 2));
                line.push('+');
            }
            line.push('\n');
            line
        };

        let format_row = |cells: &[String]| -> String {
            let mut line = String::from("|");
            for (cell, width) in cells.iter().zip(&widths) {
                let pad = width - cell.chars().count();
                line.push_str(&format!(" {}{} |", cell, " ".repeat(pad)));
            }
            line.push('\n');
            line
        };

        let headers: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
        let mut table = rule('-');
        table.push_str(&format_row(&headers));
        table.push_str(&rule('='));
        for row in &rows {
            table.push_str(&format_row(row));
            table.push_str(&rule('-'));
        }
        table
    }
}

impl ResultSink for ConsoleReporter {
    fn name(&self) -> &str {
        "console"
    }

    fn publish(&self, results: &[TestResult], prompt: &str) -> BenchResult<()> {
        let mut block = String::from("\nTest summary:\n");
        block.push_str(&format!("Prompt: {}\n", prompt));
        if results.is_empty() {
            block.push_str("No provider produced a result.\n");
        } else {
            block.push_str(&Self::render_table(results));
        }
        self.sink.write_block(&block);
        Ok(())
    }
}
