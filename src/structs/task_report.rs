use crate::enums::task_state::TaskState;
use crate::errors::BenchError;
use crate::structs::test_result::TestResult;

/// What happened to one provider's task.
#[derive(Debug, Clone)]
pub struct TaskReport {
    pub provider: String,
    pub state: TaskState,
    pub result: Option<TestResult>,
    pub error: Option<BenchError>,
}

impl TaskReport {
    pub fn pending(provider: &str) -> Self {
        Self {
            provider: provider.to_string(),
            state: TaskState::Pending,
            result: None,
            error: None,
        }
    }

    pub fn advance(&mut self, next: TaskState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid task transition {} -> {}",
            self.state,
            next
        );
        self.state = next;
    }

    pub fn complete(&mut self, result: TestResult) {
        self.advance(TaskState::Completed);
        self.result = Some(result);
    }

    pub fn fail(&mut self, error: BenchError) {
        let next = match error {
            BenchError::TaskTimeout { .. } => TaskState::TimedOut,
            _ => TaskState::Failed,
        };
        self.advance(next);
        self.error = Some(error);
    }
}
