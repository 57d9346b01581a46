use crate::logging::layers::console::ConsoleOutput;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_LEVEL: &str = "info";

/// `[logging]` section of the server config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Directory for `zaia-mcp.log`; relative paths resolve against `$HOME`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub default_level: String,

    #[serde(default)]
    pub enable_file: bool,

    #[serde(default)]
    pub console_output: ConsoleOutput,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            default_level: default_level(),
            enable_file: false,
            console_output: ConsoleOutput::default(),
        }
    }
}

fn default_level() -> String {
    DEFAULT_LEVEL.to_string()
}
