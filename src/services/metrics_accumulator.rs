use std::time::Duration;
use crate::structs::fragment::Fragment;
use crate::structs::test_result::TestResult;
use crate::structs::usage_info::UsageInfo;

/// Which phase a fragment's text was attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Reasoning,
    Content,
}

/// Timing and token state for a single test.
///
/// Every timestamp is an elapsed offset from the start of the request, so the
/// accumulator never reads a clock itself and replaying the same fragments
/// with the same offsets always gives the same result.
#[derive(Debug, Clone, Default)]
pub struct MetricsAccumulator {
    prompt_tokens: u64,
    completion_tokens: u64,
    reasoning_tokens: u64,
    content_tokens: u64,
    total_tokens: u64,

    reasoning_text: String,
    content_text: String,

    first_token_time: Option<Duration>,
    reasoning_start: Option<Duration>,
    reasoning_end: Option<Duration>,
    content_start: Option<Duration>,
    content_end: Option<Duration>,

    last_usage: Option<UsageInfo>,
}

impl MetricsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Feed one fragment, in arrival order.
    ///
    /// Returns the phase the fragment's text was attributed to, if any, so the
    /// caller can echo exactly what was counted.
    pub fn observe(&mut self, fragment: &Fragment, elapsed: Duration) -> Option<Phase> {
        if let Some(usage) = fragment.usage {
            self.apply_usage(usage);
        }

        let phase = if let Some(piece) = fragment.reasoning_text() {
            self.reasoning_text.push_str(piece);
            self.reasoning_start.get_or_insert(elapsed);
            self.reasoning_end = Some(elapsed);
            Some(Phase::Reasoning)
        } else if let Some(piece) = fragment.content_text() {
            self.content_text.push_str(piece);
            self.content_start.get_or_insert(elapsed);
            self.content_end = Some(elapsed);
            Some(Phase::Content)
        } else {
            None
        };

        if phase.is_some() && self.first_token_time.is_none() {
            self.first_token_time = Some(elapsed);
        }

        phase
    }

    fn apply_usage(&mut self, usage: UsageInfo) {
        self.prompt_tokens = usage.prompt_tokens;
        self.completion_tokens = usage.completion_tokens;
        self.total_tokens = usage.total_tokens;
        self.reasoning_tokens = usage.reasoning_tokens.unwrap_or(0);
        self.content_tokens = self.completion_tokens.saturating_sub(self.reasoning_tokens);
        self.last_usage = Some(usage);
    }

    pub fn reasoning_time(&self) -> Duration {
        span(self.reasoning_start, self.reasoning_end)
    }

    pub fn content_time(&self) -> Duration {
        span(self.content_start, self.content_end)
    }

    pub fn finalize(&self, provider: &str, total_elapsed: Duration) -> TestResult {
        TestResult {
            provider: provider.to_string(),
            first_token_time: self.first_token_time,
            reasoning_tokens: self.reasoning_tokens,
            reasoning_time: self.reasoning_time(),
            content_tokens: self.content_tokens,
            content_time: self.content_time(),
            total_tokens: self.total_tokens,
            total_time: total_elapsed,
        }
    }

    pub fn prompt_tokens(&self) -> u64 {
        self.prompt_tokens
    }

    pub fn completion_tokens(&self) -> u64 {
        self.completion_tokens
    }

    pub fn reasoning_tokens(&self) -> u64 {
        self.reasoning_tokens
    }

    pub fn content_tokens(&self) -> u64 {
        self.content_tokens
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    pub fn reasoning_text(&self) -> &str {
        &self.reasoning_text
    }

    pub fn content_text(&self) -> &str {
        &self.content_text
    }

    pub fn first_token_time(&self) -> Option<Duration> {
        self.first_token_time
    }

    pub fn last_usage(&self) -> Option<&UsageInfo> {
        self.last_usage.as_ref()
    }
}

fn span(start: Option<Duration>, end: Option<Duration>) -> Duration {
    match (start, end) {
        (Some(start), Some(end)) => end.saturating_sub(start),
        _ => Duration::ZERO,
    }
}
