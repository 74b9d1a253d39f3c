use std::time::Duration;

pub const DEFAULT_WORKERS: usize = 3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_PROMPT: &str = "给我写一首七言绝句，赞叹祖国的大好河山";

pub const CONFIG_DIR_NAME: &str = "llm-speedtest";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const REPORT_FILE_PREFIX: &str = "test_report";
pub const DEFAULT_REPORT_DIR: &str = "test_reports";

pub const CHAT_COMPLETIONS_PATH: &str = "chat/completions";
pub const SSE_DATA_PREFIX: &str = "data:";
pub const SSE_DONE_MARKER: &str = "[DONE]";

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
