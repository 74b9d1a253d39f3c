pub mod console_reporter;
pub mod csv_reporter;
pub mod html_reporter;
pub mod json_reporter;
