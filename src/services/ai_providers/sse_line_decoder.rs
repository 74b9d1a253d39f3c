use crate::enums::ai_provider_error::AiProviderError;

/// Reassembles an SSE body into lines across arbitrary byte chunk boundaries.
///
/// Bytes are buffered until a `\n` arrives, so a multibyte character split
/// between two network chunks is only decoded once it is complete.
#[derive(Debug, Default)]
pub struct SseLineDecoder {
    buffer: Vec<u8>,
}

impl SseLineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk and returns every line it completed, without the
    /// trailing `\n` / `\r\n`.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<Result<String, AiProviderError>> {
        self.buffer.extend_from_slice(bytes);

        let mut lines = Vec::new();
        while let Some(newline_pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=newline_pos).collect();
            lines.push(decode(&line[..newline_pos]));
        }
        lines
    }

    /// Flushes a final line that was not terminated by a newline.
    pub fn finish(&mut self) -> Vec<Result<String, AiProviderError>> {
        if self.buffer.is_empty() {
            return Vec::new();
        }
        let rest = std::mem::take(&mut self.buffer);
        vec![decode(&rest)]
    }

    /// Drops a partial line, e.g. after the transport failed mid-line.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }
}

fn decode(line: &[u8]) -> Result<String, AiProviderError> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    std::str::from_utf8(line)
        .map(str::to_string)
        .map_err(|e| AiProviderError::SerializationError(format!("Stream line is not valid UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_lines(results: Vec<Result<String, AiProviderError>>) -> Vec<String> {
        results.into_iter().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn character_split_between_chunks_is_kept_intact() {
        let line = "data: {\"choices\":[{\"delta\":{\"content\":\"山河\"}}]}\n".as_bytes();
        let split = line.iter().position(|&b| b >= 0x80).unwrap() + 1;

        let mut decoder = SseLineDecoder::new();
        assert!(decoder.push(&line[..split]).is_empty());
        let lines = ok_lines(decoder.push(&line[split..]));

        assert_eq!(lines, vec!["data: {\"choices\":[{\"delta\":{\"content\":\"山河\"}}]}".to_string()]);
    }

    #[test]
    fn splits_several_lines_and_strips_carriage_returns() {
        let mut decoder = SseLineDecoder::new();
        let lines = ok_lines(decoder.push(b"data: a\r\n\r\ndata: b\npartial"));
        assert_eq!(lines, vec!["data: a", "", "data: b"]);

        let lines = ok_lines(decoder.push(b" line\n"));
        assert_eq!(lines, vec!["partial line"]);
        assert!(decoder.finish().is_empty());
    }

    #[test]
    fn finish_flushes_unterminated_line() {
        let mut decoder = SseLineDecoder::new();
        assert!(decoder.push(b"data: [DONE]").is_empty());
        assert_eq!(ok_lines(decoder.finish()), vec!["data: [DONE]"]);
        assert!(decoder.finish().is_empty());
    }

    #[test]
    fn invalid_utf8_line_is_a_serialization_error() {
        let mut decoder = SseLineDecoder::new();
        let lines = decoder.push(&[b'd', 0xff, b'\n']);
        assert!(matches!(lines[0], Err(AiProviderError::SerializationError(_))));
    }

    #[test]
    fn reset_drops_partial_line() {
        let mut decoder = SseLineDecoder::new();
        decoder.push(b"data: {\"cho");
        decoder.reset();
        assert!(decoder.finish().is_empty());
    }
}
