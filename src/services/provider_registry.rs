use std::sync::Arc;
use crate::errors::{BenchError, BenchResult};
use crate::services::ai_providers::openai_compatible::OpenAiCompatibleProvider;
use crate::services::console_sink::ConsoleSink;
use crate::structs::config::provider_config::ProviderConfig;
use crate::traits::chat_provider::ChatProvider;

pub struct ProviderRegistry;

impl ProviderRegistry {
    /// Builds a provider for every enabled entry, available or not.
    pub fn build(configs: &[ProviderConfig]) -> Vec<Arc<dyn ChatProvider>> {
        configs
            .iter()
            .filter(|c| c.enabled)
            .map(|c| Arc::new(OpenAiCompatibleProvider::from_config(c)) as Arc<dyn ChatProvider>)
            .collect()
    }

    /// Keeps the providers that can be tested, narrating every skip.
    ///
    /// Having none left is fatal for the run.
    pub fn initialize(providers: Vec<Arc<dyn ChatProvider>>, sink: &ConsoleSink) -> BenchResult<Vec<Arc<dyn ChatProvider>>> {
        let mut available = Vec::with_capacity(providers.len());
        for provider in providers {
            if provider.is_available() {
                available.push(provider);
            } else {
                let skipped = BenchError::ProviderUnavailable {
                    provider: provider.name().to_string(),
                };
                log::debug!("{:?}", skipped);
                sink.write_line(&format!("\n{}", skipped.user_message()));
            }
        }

        if available.is_empty() {
            return Err(BenchError::NoProvidersAvailable);
        }

        Ok(available)
    }
}
