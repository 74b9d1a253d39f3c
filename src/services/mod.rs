pub mod ai_providers;
pub mod console_sink;
pub mod metrics_accumulator;
pub mod stream_processor;
pub mod provider_registry;
pub mod reporters;
