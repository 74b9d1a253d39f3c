use std::io::Write;
use std::sync::Mutex;

enum SinkTarget {
    Stdout,
    Memory(String),
}

/// The one piece of output shared between concurrently running tests.
///
/// Each call to `write_block` holds the lock for the whole block, so two
/// tasks flushing at the same time never interleave their text.
pub struct ConsoleSink {
    target: Mutex<SinkTarget>,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self {
            target: Mutex::new(SinkTarget::Stdout),
        }
    }

    /// Captures everything in memory instead of printing it.
    pub fn in_memory() -> Self {
        Self {
            target: Mutex::new(SinkTarget::Memory(String::new())),
        }
    }

    pub fn write_block(&self, block: &str) {
        if block.is_empty() {
            return;
        }

        let mut target = self.target.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        match &mut *target {
            SinkTarget::Stdout => {
                let mut out = std::io::stdout().lock();
                if let Err(e) = out.write_all(block.as_bytes()).and_then(|_| out.flush()) {
                    log::warn!("⚠️ Failed to write to console: {}", e);
                }
            }
            SinkTarget::Memory(buffer) => buffer.push_str(block),
        }
    }

    pub fn write_line(&self, line: &str) {
        self.write_block(&format!("{}\n", line));
    }

    /// Captured text; always empty for a stdout sink.
    pub fn contents(&self) -> String {
        let target = self.target.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        match &*target {
            SinkTarget::Stdout => String::new(),
            SinkTarget::Memory(buffer) => buffer.clone(),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}
