use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::config::constants::DEFAULT_REPORT_DIR;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Report directory; `test_reports` when unset
    #[serde(default)]
    pub output_dir: Option<String>,

    #[serde(default = "ConfigHelper::default_table_report")]
    pub csv_report: bool,

    #[serde(default = "ConfigHelper::default_table_report")]
    pub html_report: bool,

    #[serde(default = "ConfigHelper::default_json_report")]
    pub json_report: bool,
}

impl OutputConfig {
    /// An explicit directory wins over the configured one.
    pub fn report_dir(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.output_dir.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_DIR))
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            csv_report: ConfigHelper::default_table_report(),
            html_report: ConfigHelper::default_table_report(),
            json_report: ConfigHelper::default_json_report(),
        }
    }
}
