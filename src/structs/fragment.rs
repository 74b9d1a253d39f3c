use crate::structs::ai::chat_completions::stream_chunk::StreamChunk;
use crate::structs::usage_info::UsageInfo;

/// Text carried by a single streamed delta.
///
/// Providers populate at most one of the two fields per delta. When both are
/// present the accumulator only looks at `reasoning`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentDelta {
    pub reasoning: Option<String>,
    pub content: Option<String>,
}

/// One incremental unit of a streaming response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub usage: Option<UsageInfo>,
    pub delta: Option<FragmentDelta>,
}

impl Fragment {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn reasoning(text: impl Into<String>) -> Self {
        Self {
            usage: None,
            delta: Some(FragmentDelta {
                reasoning: Some(text.into()),
                content: None,
            }),
        }
    }

    pub fn content(text: impl Into<String>) -> Self {
        Self {
            usage: None,
            delta: Some(FragmentDelta {
                reasoning: None,
                content: Some(text.into()),
            }),
        }
    }

    pub fn usage(usage: UsageInfo) -> Self {
        Self {
            usage: Some(usage),
            delta: None,
        }
    }

    pub fn with_usage(mut self, usage: UsageInfo) -> Self {
        self.usage = Some(usage);
        self
    }

    /// Non-empty reasoning text, if any.
    pub fn reasoning_text(&self) -> Option<&str> {
        self.delta
            .as_ref()
            .and_then(|d| d.reasoning.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// Non-empty content text, if any.
    pub fn content_text(&self) -> Option<&str> {
        self.delta
            .as_ref()
            .and_then(|d| d.content.as_deref())
            .filter(|s| !s.is_empty())
    }
}

impl From<StreamChunk> for Fragment {
    fn from(chunk: StreamChunk) -> Self {
        let delta = chunk
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta)
            .map(|delta| FragmentDelta {
                reasoning: delta.reasoning_content,
                content: delta.content,
            });

        Self {
            usage: chunk.usage.map(UsageInfo::from),
            delta,
        }
    }
}
