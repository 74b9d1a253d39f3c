use std::time::Duration;

/// Immutable outcome of one successful provider test.
#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    pub provider: String,
    pub first_token_time: Option<Duration>,
    pub reasoning_tokens: u64,
    pub reasoning_time: Duration,
    pub content_tokens: u64,
    pub content_time: Duration,
    pub total_tokens: u64,
    pub total_time: Duration,
}

impl TestResult {
    pub fn reasoning_speed(&self) -> f64 {
        rate(self.reasoning_tokens, self.reasoning_time)
    }

    pub fn content_speed(&self) -> f64 {
        rate(self.content_tokens, self.content_time)
    }

    /// Aggregate throughput over the whole request, prompt tokens included.
    pub fn tokens_per_second(&self) -> f64 {
        rate(self.total_tokens, self.total_time)
    }
}

pub(crate) fn rate(tokens: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        tokens as f64 / secs
    } else {
        0.0
    }
}
