pub mod openai_compatible;
pub mod sse_line_decoder;
