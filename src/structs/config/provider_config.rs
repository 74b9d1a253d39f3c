use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Static description of one endpoint; secrets stay in the environment.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProviderConfig {
    pub name: String,

    pub api_key_env: String,

    pub base_url: String,

    #[serde(default)]
    pub model: String,

    /// Environment variable that overrides `model`, e.g. a deployment endpoint id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_env: Option<String>,

    #[serde(default = "ConfigHelper::default_enabled")]
    pub enabled: bool,
}

impl ProviderConfig {
    pub fn new(name: &str, api_key_env: &str, base_url: &str, model: &str) -> Self {
        Self {
            name: name.to_string(),
            api_key_env: api_key_env.to_string(),
            base_url: base_url.to_string(),
            model: model.to_string(),
            model_env: None,
            enabled: true,
        }
    }

    pub fn with_model_env(mut self, model_env: &str) -> Self {
        self.model_env = Some(model_env.to_string());
        self
    }

    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    pub fn resolve_model(&self) -> String {
        self.model_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok())
            .map(|model| model.trim().to_string())
            .filter(|model| !model.is_empty())
            .unwrap_or_else(|| self.model.clone())
    }
}
