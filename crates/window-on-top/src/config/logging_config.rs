use crate::config::{default_log_filter, default_log_to_file};

use serde::{Deserialize, Serialize};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Also write a daily rolling log file under the data directory.
    #[serde(default = "default_log_to_file")]
    pub log_to_file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            log_to_file: default_log_to_file(),
        }
    }
}
