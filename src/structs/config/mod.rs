pub mod config;
pub mod provider_config;
pub mod run_config;
pub mod output_config;
