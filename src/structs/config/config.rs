use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::provider_config::ProviderConfig;
use crate::structs::config::run_config::RunConfig;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub run: RunConfig,

    #[serde(default = "ConfigHelper::default_providers")]
    pub providers: Vec<ProviderConfig>,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            run: RunConfig::default(),
            providers: ConfigHelper::default_providers(),
            output: OutputConfig::default(),
        }
    }
}
