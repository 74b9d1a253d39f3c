use serde::{Deserialize, Serialize};
use crate::structs::ai::chat_completions::completion_tokens_details::CompletionTokensDetails;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkUsage {
    #[serde(default)]
    pub prompt_tokens: u64,

    #[serde(default)]
    pub completion_tokens: u64,

    #[serde(default)]
    pub total_tokens: u64,

    #[serde(default)]
    pub completion_tokens_details: Option<CompletionTokensDetails>,
}
