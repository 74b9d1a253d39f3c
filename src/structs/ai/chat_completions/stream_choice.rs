use serde::{Deserialize, Serialize};
use crate::structs::ai::chat_completions::stream_delta::StreamDelta;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamChoice {
    #[serde(default)]
    pub index: i32,

    #[serde(default)]
    pub delta: Option<StreamDelta>,

    #[serde(default)]
    pub finish_reason: Option<String>,
}
