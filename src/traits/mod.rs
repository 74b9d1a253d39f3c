pub mod chat_provider;
pub mod result_sink;
