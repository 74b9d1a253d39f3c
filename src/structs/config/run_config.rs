use serde::{Deserialize, Serialize};
use crate::enums::test_mode::TestMode;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RunConfig {
    #[serde(default = "ConfigHelper::default_mode")]
    pub mode: TestMode,

    #[serde(default = "ConfigHelper::default_workers")]
    pub workers: usize,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_prompt")]
    pub prompt: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: ConfigHelper::default_mode(),
            workers: ConfigHelper::default_workers(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
            prompt: ConfigHelper::default_prompt(),
        }
    }
}
