//! Streaming chat-completion speed benchmark.
//!
//! A [`services::stream_processor::StreamProcessor`] drives one provider test
//! and turns the streamed fragments into a [`structs::test_result::TestResult`];
//! [`workers::sequential_runner::SequentialRunner`] and
//! [`workers::concurrent_orchestrator::ConcurrentOrchestrator`] run it across
//! many providers.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
