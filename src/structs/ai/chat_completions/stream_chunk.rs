use serde::{Deserialize, Serialize};
use crate::structs::ai::chat_completions::chunk_usage::ChunkUsage;
use crate::structs::ai::chat_completions::stream_choice::StreamChoice;

/// One `data:` payload of an OpenAI-compatible chat-completions stream.
///
/// Vendors disagree on which fields they send, so everything is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamChunk {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub choices: Vec<StreamChoice>,

    #[serde(default)]
    pub usage: Option<ChunkUsage>,
}
