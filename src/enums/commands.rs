use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::test_mode::TestMode;

#[derive(Subcommand)]
pub enum Commands {
    /// Benchmark every available provider with one prompt
    Run {
        #[clap(short, long, value_enum)]
        mode: Option<TestMode>,
        /// Worker count for parallel mode
        #[clap(short, long)]
        workers: Option<usize>,
        /// Per-test timeout in seconds
        #[clap(short, long)]
        timeout: Option<u64>,
        #[clap(short, long)]
        prompt: Option<String>,
        /// Directory for the report files (default: test_reports)
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Show configured providers and whether they can be tested
    List,
    /// Write a sample config file
    Init,
    /// Check the config file for mistakes
    Validate,
}
