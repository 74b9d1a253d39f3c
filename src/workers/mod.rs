pub mod command_runner;
pub mod sequential_runner;
pub mod concurrent_orchestrator;
