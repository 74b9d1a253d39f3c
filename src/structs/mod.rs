pub mod ai;
pub mod cli;
pub mod config;
pub mod fragment;
pub mod usage_info;
pub mod output_buffer;
pub mod test_result;
pub mod task_report;
pub mod parallel_test_config;
