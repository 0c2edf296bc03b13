use crate::{DEFAULT_LOG_DIRECTORY, LogLevel};

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored stdout output (ignored when logging to a file)
    pub colored: bool,
    /// Log file name inside `dir`; stdout when unset
    pub file: Option<String>,
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: true,
            file: None,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
        }
    }
}

impl LoggingConfig {
    /// Full path of the log file, if file logging is enabled
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file
            .as_ref()
            .filter(|f| !f.trim().is_empty())
            .map(|f| PathBuf::from(&self.dir).join(f))
    }
}
