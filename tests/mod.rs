mod common;
mod sequential_runner_tests;
mod stream_processor_tests;
