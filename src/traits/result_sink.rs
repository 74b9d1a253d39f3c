use crate::errors::BenchResult;
use crate::structs::test_result::TestResult;

/// Consumer of the final, provider-sorted result list.
pub trait ResultSink: Send + Sync {
    fn name(&self) -> &str {
        "result sink"
    }

    fn publish(&self, results: &[TestResult], prompt: &str) -> BenchResult<()>;
}
