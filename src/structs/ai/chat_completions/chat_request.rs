use serde::{Deserialize, Serialize};
use crate::structs::ai::chat_completions::chat_message::ChatMessage;
use crate::structs::ai::chat_completions::stream_options::StreamOptions;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,

    pub messages: Vec<ChatMessage>,

    pub stream: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_options: Option<StreamOptions>,
}
