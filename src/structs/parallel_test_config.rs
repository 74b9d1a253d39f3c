use std::time::Duration;
use crate::config::constants::{timeout_duration, DEFAULT_TIMEOUT_SECS, DEFAULT_WORKERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelTestConfig {
    /// Upper bound on concurrently running tests
    pub max_workers: usize,
    /// Deadline for a single test, counted from the moment it starts running
    pub timeout: Duration,
}

impl ParallelTestConfig {
    pub fn new(max_workers: usize, timeout_secs: u64) -> Self {
        Self {
            max_workers,
            timeout: timeout_duration(timeout_secs),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pool size for `provider_count` tasks, never below one.
    pub fn pool_size(&self, provider_count: usize) -> usize {
        self.max_workers.min(provider_count).max(1)
    }
}

impl Default for ParallelTestConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS, DEFAULT_TIMEOUT_SECS)
    }
}
