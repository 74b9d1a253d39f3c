use reqwest::Client;
use futures::{future, stream, StreamExt};
use async_trait::async_trait;
use crate::config::constants::{CHAT_COMPLETIONS_PATH, SSE_DATA_PREFIX, SSE_DONE_MARKER};
use crate::enums::ai_provider_error::AiProviderError;
use crate::services::ai_providers::sse_line_decoder::SseLineDecoder;
use crate::structs::ai::chat_completions::api_error::ApiError;
use crate::structs::ai::chat_completions::chat_message::ChatMessage;
use crate::structs::ai::chat_completions::chat_request::ChatRequest;
use crate::structs::ai::chat_completions::stream_chunk::StreamChunk;
use crate::structs::ai::chat_completions::stream_options::StreamOptions;
use crate::structs::config::provider_config::ProviderConfig;
use crate::structs::fragment::Fragment;
use crate::traits::chat_provider::{ChatProvider, FragmentStream};

/// Any endpoint speaking the OpenAI chat-completions streaming protocol.
#[derive(Clone)]
pub struct OpenAiCompatibleProvider {
    name: String,
    api_key: Option<String>,
    base_url: String,
    model: String,
    client: Client,
}

impl OpenAiCompatibleProvider {
    pub fn new(name: String, api_key: Option<String>, base_url: String, model: String) -> Self {
        Self {
            name,
            api_key,
            base_url,
            model,
            client: Client::new(),
        }
    }

    /// Resolves the key and model from the environment.
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(
            config.name.clone(),
            config.resolve_api_key(),
            config.base_url.clone(),
            config.resolve_model(),
        )
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), CHAT_COMPLETIONS_PATH)
    }

    fn get_request(&self, messages: &[ChatMessage]) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            stream: true,
            stream_options: Some(StreamOptions { include_usage: true }),
        }
    }

    async fn make_request(&self, api_key: &str, request_body: &ChatRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 {} request model: {}", self.name, request_body.model);

        self.client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .header("Accept", "text/event-stream")
            .json(request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }

    /// Parses one SSE line into a fragment.
    ///
    /// Returns `None` for blank lines, comments, non-data fields and the
    /// terminal `[DONE]` marker.
    pub fn parse_sse_line(line: &str) -> Option<Result<Fragment, AiProviderError>> {
        let line = line.trim_end_matches('\r');
        let data = line.strip_prefix(SSE_DATA_PREFIX)?.trim();

        if data.is_empty() || data == SSE_DONE_MARKER {
            return None;
        }

        let json: serde_json::Value = match serde_json::from_str(data) {
            Ok(json) => json,
            Err(e) => {
                return Some(Err(AiProviderError::SerializationError(format!("Failed to parse stream event: {}", e))));
            }
        };

        if let Some(error) = json.get("error").filter(|e| !e.is_null()) {
            let error: ApiError = serde_json::from_value(error.clone()).unwrap_or(ApiError {
                error_type: None,
                message: Some(error.to_string()),
            });
            return Some(Err(AiProviderError::ApiError(format!(
                "{}: {}",
                error.error_type.as_deref().unwrap_or("api_error"),
                error.message.as_deref().unwrap_or("Unknown error"),
            ))));
        }

        Some(
            serde_json::from_value::<StreamChunk>(json)
                .map(Fragment::from)
                .map_err(|e| AiProviderError::SerializationError(format!("Unexpected stream chunk: {}", e))),
        )
    }
}

#[async_trait]
impl ChatProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn open_stream(&self, messages: &[ChatMessage]) -> Result<FragmentStream, AiProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AiProviderError::Unavailable(format!("{} has no API key", self.name)))?;

        if self.model.trim().is_empty() {
            return Err(AiProviderError::Unavailable(format!("{} has no model configured", self.name)));
        }

        let request_body = self.get_request(messages);
        let response = self.make_request(api_key, &request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::warn!("❌ {} API error response: {}", self.name, error_text);

            return Err(match status.as_u16() {
                401 | 403 => AiProviderError::AuthenticationError(error_text),
                429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", error_text)),
                _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, error_text)),
            });
        }

        // A trailing `None` marks end of body so an unterminated last line is still parsed
        let fragments = response
            .bytes_stream()
            .map(Some)
            .chain(stream::once(future::ready(None)))
            .scan(SseLineDecoder::new(), |decoder, chunk| {
                let lines = match chunk {
                    Some(Ok(bytes)) => decoder.push(&bytes),
                    Some(Err(e)) => {
                        decoder.reset();
                        vec![Err(AiProviderError::NetworkError(format!("Stream error: {}", e)))]
                    }
                    None => decoder.finish(),
                };

                let items: Vec<Result<Fragment, AiProviderError>> = lines
                    .into_iter()
                    .filter_map(|line| match line {
                        Ok(line) => Self::parse_sse_line(&line),
                        Err(e) => Some(Err(e)),
                    })
                    .collect();

                future::ready(Some(stream::iter(items)))
            })
            .flatten();

        Ok(Box::pin(fragments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::usage_info::UsageInfo;

    #[test]
    fn parses_reasoning_delta() {
        let line = r#"data: {"id":"1","choices":[{"index":0,"delta":{"role":"assistant","content":null,"reasoning_content":"Hmm"},"finish_reason":null}]}"#;
        let fragment = OpenAiCompatibleProvider::parse_sse_line(line).unwrap().unwrap();
        assert_eq!(fragment.reasoning_text(), Some("Hmm"));
        assert_eq!(fragment.content_text(), None);
        assert!(fragment.usage.is_none());
    }

    #[test]
    fn parses_usage_only_chunk_with_reasoning_details() {
        let line = r#"data: {"choices":[],"usage":{"prompt_tokens":5,"completion_tokens":15,"total_tokens":20,"completion_tokens_details":{"reasoning_tokens":10}}}"#;
        let fragment = OpenAiCompatibleProvider::parse_sse_line(line).unwrap().unwrap();
        assert_eq!(fragment.usage, Some(UsageInfo::new(5, 15, 20).with_reasoning_tokens(10)));
        assert!(fragment.delta.is_none());
    }

    #[test]
    fn null_usage_details_mean_no_reasoning_tokens() {
        let line = "data: {\"choices\":[{\"delta\":{\"content\":\"Hi\"}}],\"usage\":{\"prompt_tokens\":1,\"completion_tokens\":1,\"total_tokens\":2,\"completion_tokens_details\":null}}\r";
        let fragment = OpenAiCompatibleProvider::parse_sse_line(line).unwrap().unwrap();
        assert_eq!(fragment.content_text(), Some("Hi"));
        assert_eq!(fragment.usage.unwrap().reasoning_tokens, None);
    }

    #[test]
    fn skips_non_data_lines_and_done() {
        assert!(OpenAiCompatibleProvider::parse_sse_line("").is_none());
        assert!(OpenAiCompatibleProvider::parse_sse_line(": keep-alive").is_none());
        assert!(OpenAiCompatibleProvider::parse_sse_line("event: message").is_none());
        assert!(OpenAiCompatibleProvider::parse_sse_line("data: [DONE]").is_none());
    }

    #[test]
    fn surfaces_errors() {
        let err = OpenAiCompatibleProvider::parse_sse_line(r#"data: {"error":{"type":"overloaded","message":"busy"}}"#)
            .unwrap()
            .unwrap_err();
        assert_eq!(err, AiProviderError::ApiError("overloaded: busy".to_string()));

        let err = OpenAiCompatibleProvider::parse_sse_line("data: {not json").unwrap().unwrap_err();
        assert!(matches!(err, AiProviderError::SerializationError(_)));
    }

    #[test]
    fn null_error_field_is_not_an_error() {
        let line = r#"data: {"choices":[{"delta":{"content":"ok"}}],"error":null}"#;
        let fragment = OpenAiCompatibleProvider::parse_sse_line(line).unwrap().unwrap();
        assert_eq!(fragment.content_text(), Some("ok"));
    }

    #[test]
    fn availability_follows_api_key() {
        let make = |key: Option<&str>| {
            OpenAiCompatibleProvider::new("p".into(), key.map(String::from), "http://x/v1/".into(), "m".into())
        };
        assert!(make(Some("sk-1")).is_available());
        assert!(!make(Some("  ")).is_available());
        assert!(!make(None).is_available());
        assert_eq!(make(None).endpoint(), "http://x/v1/chat/completions");
    }

    #[tokio::test]
    async fn open_stream_without_key_never_sends() {
        let provider = OpenAiCompatibleProvider::new("p".into(), None, "http://127.0.0.1:9".into(), "m".into());
        let err = provider.open_stream(&[ChatMessage::user("hi")]).await.err().unwrap();
        assert!(matches!(err, AiProviderError::Unavailable(_)));
    }
}
