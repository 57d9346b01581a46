pub mod loader;
pub mod validation;

pub use loader::{ConfigLoader, ConfigOverrides};
pub use validation::ConfigValidator;

use crate::logging::config::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Server configuration loaded from `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ServerConfig {
    /// External programs
    #[serde(default)]
    pub programs: ProgramsConfig,

    /// Logging sinks and level
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which binaries to spawn and how to prepare their environment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgramsConfig {
    /// zaia binary, a name looked up on PATH or a path
    #[serde(default = "default_zaia")]
    pub zaia: String,

    /// zcli binary
    #[serde(default = "default_zcli")]
    pub zcli: String,

    /// Replace PATH with the login shell's PATH before spawning
    #[serde(default = "default_resolve_shell_path")]
    pub resolve_shell_path: bool,
}

impl Default for ProgramsConfig {
    fn default() -> Self {
        Self {
            zaia: default_zaia(),
            zcli: default_zcli(),
            resolve_shell_path: default_resolve_shell_path(),
        }
    }
}

fn default_zaia() -> String {
    "zaia".to_string()
}

fn default_zcli() -> String {
    "zcli".to_string()
}

fn default_resolve_shell_path() -> bool {
    true
}
