use std::fmt;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TestMode {
    /// One provider after another, in name order
    Seq,
    /// Providers in parallel on a bounded worker pool
    Multi,
}

impl fmt::Display for TestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestMode::Seq => write!(f, "sequential"),
            TestMode::Multi => write!(f, "parallel"),
        }
    }
}
