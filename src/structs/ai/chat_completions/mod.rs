pub mod api_error;
pub mod chat_message;
pub mod chat_request;
pub mod chunk_usage;
pub mod completion_tokens_details;
pub mod stream_choice;
pub mod stream_chunk;
pub mod stream_delta;
pub mod stream_options;
