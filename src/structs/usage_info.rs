use std::fmt;
use serde::{Deserialize, Serialize};
use crate::structs::ai::chat_completions::chunk_usage::ChunkUsage;

/// Token usage as reported by a provider, normalized across vendors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageInfo {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
    pub reasoning_tokens: Option<u64>,
}

impl UsageInfo {
    pub fn new(prompt_tokens: u64, completion_tokens: u64, total_tokens: u64) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens,
            reasoning_tokens: None,
        }
    }

    pub fn with_reasoning_tokens(mut self, reasoning_tokens: u64) -> Self {
        self.reasoning_tokens = Some(reasoning_tokens);
        self
    }
}

impl From<ChunkUsage> for UsageInfo {
    fn from(usage: ChunkUsage) -> Self {
        Self {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
            reasoning_tokens: usage.completion_tokens_details.and_then(|d| d.reasoning_tokens),
        }
    }
}

impl fmt::Display for UsageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "prompt_tokens={}, completion_tokens={}, total_tokens={}",
            self.prompt_tokens, self.completion_tokens, self.total_tokens
        )?;
        if let Some(reasoning) = self.reasoning_tokens {
            write!(f, ", reasoning_tokens={}", reasoning)?;
        }
        Ok(())
    }
}
