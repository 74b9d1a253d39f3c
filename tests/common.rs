use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::{future, stream, StreamExt};
use llm_speedtest::enums::ai_provider_error::AiProviderError;
use llm_speedtest::structs::ai::chat_completions::chat_message::ChatMessage;
use llm_speedtest::structs::fragment::Fragment;
use llm_speedtest::traits::chat_provider::{ChatProvider, FragmentStream};

// ============================================================================
// Scripted provider
// ============================================================================

#[derive(Debug, Clone)]
pub enum Step {
    Wait(Duration),
    Emit(Fragment),
    Fail(AiProviderError),
    Panic,
}

pub fn wait_ms(ms: u64) -> Step {
    Step::Wait(Duration::from_millis(ms))
}

/// Tracks how many streams are open at once.
#[derive(Debug, Default)]
pub struct InFlight {
    current: AtomicUsize,
    peak: AtomicUsize,
}

impl InFlight {
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    fn enter(self: &Arc<Self>) -> InFlightGuard {
        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        InFlightGuard(Arc::clone(self))
    }
}

struct InFlightGuard(Arc<InFlight>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.current.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct ScriptedProvider {
    name: String,
    api_key: Option<String>,
    steps: Vec<Step>,
    open_error: Option<AiProviderError>,
    opened: AtomicUsize,
    in_flight: Option<Arc<InFlight>>,
}

impl ScriptedProvider {
    pub fn new(name: &str, steps: Vec<Step>) -> Self {
        Self {
            name: name.to_string(),
            api_key: Some("sk-test".to_string()),
            steps,
            open_error: None,
            opened: AtomicUsize::new(0),
            in_flight: None,
        }
    }

    pub fn unavailable(name: &str) -> Self {
        let mut provider = Self::new(name, vec![Step::Emit(Fragment::content("never"))]);
        provider.api_key = None;
        provider
    }

    /// Streams `text` as content after `delay_ms`, then a usage chunk.
    pub fn quick(name: &str, delay_ms: u64, text: &str) -> Self {
        Self::new(
            name,
            vec![
                wait_ms(delay_ms),
                Step::Emit(Fragment::content(text)),
                Step::Emit(Fragment::usage(llm_speedtest::structs::usage_info::UsageInfo::new(4, 1, 5))),
            ],
        )
    }

    pub fn with_open_error(mut self, error: AiProviderError) -> Self {
        self.open_error = Some(error);
        self
    }

    pub fn with_in_flight(mut self, in_flight: Arc<InFlight>) -> Self {
        self.in_flight = Some(in_flight);
        self
    }

    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn shared(self) -> Arc<dyn ChatProvider> {
        Arc::new(self)
    }
}

#[async_trait]
impl ChatProvider for ScriptedProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn base_url(&self) -> &str {
        "http://scripted.invalid/v1"
    }

    fn model(&self) -> &str {
        "scripted"
    }

    async fn open_stream(&self, _messages: &[ChatMessage]) -> Result<FragmentStream, AiProviderError> {
        self.opened.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = &self.open_error {
            return Err(error.clone());
        }

        let guard = self.in_flight.as_ref().map(|tracker| tracker.enter());

        let items = stream::iter(self.steps.clone())
            .then(|step| async move {
                match step {
                    Step::Wait(duration) => {
                        tokio::time::sleep(duration).await;
                        None
                    }
                    Step::Emit(fragment) => Some(Ok(fragment)),
                    Step::Fail(error) => Some(Err(error)),
                    Step::Panic => panic!("scripted provider blew up"),
                }
            })
            .filter_map(future::ready)
            .map(move |item| {
                let _held = &guard;
                item
            });

        Ok(Box::pin(items))
    }
}

pub fn prompt() -> Vec<ChatMessage> {
    vec![ChatMessage::user("Write a short poem")]
}

pub fn assert_close(actual: Duration, expected: Duration) {
    let diff = if actual > expected { actual - expected } else { expected - actual };
    assert!(
        diff <= Duration::from_millis(5),
        "expected ~{:?}, got {:?}",
        expected,
        actual
    );
}
