use crate::config::constants::{DEFAULT_PROMPT, DEFAULT_TIMEOUT_SECS, DEFAULT_WORKERS};
use crate::enums::test_mode::TestMode;
use crate::structs::config::provider_config::ProviderConfig;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_mode() -> TestMode {
        TestMode::Seq
    }

    pub fn default_workers() -> usize {
        DEFAULT_WORKERS
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    pub fn default_prompt() -> String {
        DEFAULT_PROMPT.to_string()
    }

    pub fn default_enabled() -> bool {
        true
    }

    pub fn default_json_report() -> bool {
        false
    }

    pub fn default_table_report() -> bool {
        true
    }

    /// The OpenAI-compatible endpoints serving DeepSeek-R1 that the tool
    /// benchmarks out of the box.
    pub fn default_providers() -> Vec<ProviderConfig> {
        vec![
            ProviderConfig::new("DeepSeek", "DEEPSEEK_API_KEY", "https://api.deepseek.com", "deepseek-reasoner"),
            ProviderConfig::new("Aliyun Bailian", "ALIYUN_API_KEY", "https://dashscope.aliyuncs.com/compatible-mode/v1", "deepseek-r1"),
            ProviderConfig::new("Baidu Qianfan", "QIANFAN_API_KEY", "https://qianfan.baidubce.com/v2", "deepseek-r1"),
            ProviderConfig::new("SiliconFlow", "SILICONFLOW_API_KEY", "https://api.siliconflow.cn/v1", "deepseek-ai/DeepSeek-R1"),
            ProviderConfig::new("SiliconFlow Pro", "SILICONFLOW_API_KEY", "https://api.siliconflow.cn/v1", "Pro/deepseek-ai/DeepSeek-R1"),
            ProviderConfig::new("Volcengine", "VOLCES_API_KEY", "https://ark.cn-beijing.volces.com/api/v3", "")
                .with_model_env("VOLCES_ENDPOINT"),
            ProviderConfig::new("Tencent Cloud", "TENCENTCLOUD_API_KEY", "https://api.lkeap.cloud.tencent.com/v1", "deepseek-r1"),
        ]
    }
}
