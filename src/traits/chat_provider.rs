use std::pin::Pin;
use async_trait::async_trait;
use futures::Stream;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::chat_completions::chat_message::ChatMessage;
use crate::structs::fragment::Fragment;

pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<Fragment, AiProviderError>> + Send>>;

/// A streaming chat-completion endpoint under test.
///
/// The stream returned by `open_stream` is finite and cannot be restarted;
/// a retry means opening a new one.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn name(&self) -> &str;

    fn api_key(&self) -> Option<&str>;

    fn base_url(&self) -> &str;

    fn model(&self) -> &str;

    fn is_available(&self) -> bool {
        self.api_key().map_or(false, |key| !key.trim().is_empty())
    }

    async fn open_stream(&self, messages: &[ChatMessage]) -> Result<FragmentStream, AiProviderError>;
}
