use std::time::Duration;
use thiserror::Error;
use crate::enums::ai_provider_error::AiProviderError;

#[derive(Debug, Clone, Error)]
pub enum BenchError {
    #[error("provider '{provider}' is unavailable: missing API key")]
    ProviderUnavailable { provider: String },

    #[error("provider '{provider}' stream failed: {reason}")]
    StreamFailure { provider: String, reason: String },

    #[error("provider '{provider}' timed out after {}s", .timeout.as_secs())]
    TaskTimeout { provider: String, timeout: Duration },

    #[error("no providers available, aborting the run")]
    NoProvidersAvailable,

    #[error("configuration error: {message}")]
    Configuration { message: String, field: Option<String> },

    #[error("I/O error during {operation}: {reason}")]
    Io { operation: String, reason: String },

    #[error("serialization error in {content_type}: {reason}")]
    Serialization { content_type: String, reason: String },
}

impl BenchError {
    pub fn stream_failure(provider: &str, cause: &AiProviderError) -> Self {
        Self::StreamFailure {
            provider: provider.to_string(),
            reason: cause.to_string(),
        }
    }

    pub fn config_error(message: &str, field: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
        }
    }

    pub fn io_error(operation: &str, reason: &str) -> Self {
        Self::Io {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// The provider the failure belongs to, when it is a per-task failure.
    pub fn provider(&self) -> Option<&str> {
        match self {
            Self::ProviderUnavailable { provider }
            | Self::StreamFailure { provider, .. }
            | Self::TaskTimeout { provider, .. } => Some(provider),
            _ => None,
        }
    }

    /// Timeouts aggregate exactly like stream failures.
    pub fn is_stream_failure(&self) -> bool {
        matches!(self, Self::StreamFailure { .. } | Self::TaskTimeout { .. })
    }

    /// Per-provider failures only drop that provider from the results.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ProviderUnavailable { .. } => true,
            Self::StreamFailure { .. } => true,
            Self::TaskTimeout { .. } => true,
            Self::NoProvidersAvailable => false,
            Self::Configuration { .. } => false,
            Self::Io { .. } => false,
            Self::Serialization { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoProvidersAvailable => ErrorSeverity::Critical,
            Self::Configuration { .. } => ErrorSeverity::High,
            Self::Io { .. } => ErrorSeverity::High,
            Self::Serialization { .. } => ErrorSeverity::Medium,
            Self::StreamFailure { .. } => ErrorSeverity::Medium,
            Self::TaskTimeout { .. } => ErrorSeverity::Medium,
            Self::ProviderUnavailable { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ProviderUnavailable { provider } => {
                format!("Skipping provider {}: API key not configured", provider)
            }
            Self::StreamFailure { provider, reason } => {
                format!("Provider {} failed during streaming: {}", provider, reason)
            }
            Self::TaskTimeout { provider, timeout } => {
                format!("Provider {} did not finish within {}s", provider, timeout.as_secs())
            }
            Self::NoProvidersAvailable => {
                "No providers available, the test run was aborted\n💡 Set at least one API key in your environment or .env file".to_string()
            }
            Self::Configuration { message, field } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                msg
            }
            Self::Io { operation, reason } => {
                format!("I/O error during {}: {}\n💡 Check file permissions and path", operation, reason)
            }
            Self::Serialization { content_type, reason } => {
                format!("Failed to process {}: {}", content_type, reason)
            }
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for benchmark operations
pub type BenchResult<T> = Result<T, BenchError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message
    pub fn handle_error(error: &BenchError) {
        let severity = error.severity();

        log::error!("[{}] {:?}", severity.name(), error);
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 The remaining providers are not affected");
        }
    }
}

impl From<std::io::Error> for BenchError {
    fn from(error: std::io::Error) -> Self {
        BenchError::Io {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<csv::Error> for BenchError {
    fn from(error: csv::Error) -> Self {
        BenchError::Serialization {
            content_type: "CSV".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(error: serde_json::Error) -> Self {
        BenchError::Serialization {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for BenchError {
    fn from(error: toml::de::Error) -> Self {
        BenchError::Serialization {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<toml::ser::Error> for BenchError {
    fn from(error: toml::ser::Error) -> Self {
        BenchError::Serialization {
            content_type: "TOML".to_string(),
            reason: error.to_string(),
        }
    }
}
