pub mod commands;
pub mod ai_provider_error;
pub mod test_mode;
pub mod task_state;
