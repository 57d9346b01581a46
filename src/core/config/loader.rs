use super::{ConfigValidator, ServerConfig};
use crate::core::error::ConfigError;
use std::env;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "zaia-mcp";
const CONFIG_FILE: &str = "config.toml";

/// Values given on the command line; they win over file and environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub zaia_bin: Option<String>,
    pub zcli_bin: Option<String>,
    pub no_shell_path: bool,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Resolve the full configuration: defaults, file, environment, command
    /// line, then validation. With no explicit path the per-user file is
    /// used when it exists.
    pub fn load(
        explicit: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<ServerConfig, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::load_required(path)?,
            None => match Self::default_path() {
                Some(path) => Self::load_from_file(&path)?.unwrap_or_default(),
                None => ServerConfig::default(),
            },
        };

        Self::apply_env_overrides(&mut config);
        Self::apply_overrides(&mut config, overrides);
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/zaia-mcp/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs_next::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load config from a specific file path.
    /// Returns Ok(None) if the file doesn't exist.
    pub fn load_from_file(path: &Path) -> Result<Option<ServerConfig>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Some(config))
    }

    // A file named on the command line has to exist.
    fn load_required(path: &Path) -> Result<ServerConfig, ConfigError> {
        Self::load_from_file(path)?.ok_or_else(|| ConfigError::Read {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        })
    }

    /// Environment variables take precedence over config file values.
    /// Unparseable booleans are ignored.
    fn apply_env_overrides(config: &mut ServerConfig) {
        if let Ok(zaia) = env::var("ZAIA_MCP_ZAIA_BIN") {
            config.programs.zaia = zaia;
        }

        if let Ok(zcli) = env::var("ZAIA_MCP_ZCLI_BIN") {
            config.programs.zcli = zcli;
        }

        if let Ok(resolve_str) = env::var("ZAIA_MCP_RESOLVE_SHELL_PATH") {
            if let Ok(resolve) = resolve_str.parse::<bool>() {
                config.programs.resolve_shell_path = resolve;
            }
        }

        if let Ok(level) = env::var("ZAIA_MCP_LOG_LEVEL") {
            config.logging.default_level = level;
        }

        if let Ok(log_dir) = env::var("ZAIA_MCP_LOG_DIR") {
            if !log_dir.trim().is_empty() {
                config.logging.log_dir = Some(PathBuf::from(log_dir));
                config.logging.enable_file = true;
            }
        }
    }

    fn apply_overrides(config: &mut ServerConfig, overrides: &ConfigOverrides) {
        if let Some(zaia) = &overrides.zaia_bin {
            config.programs.zaia = zaia.clone();
        }
        if let Some(zcli) = &overrides.zcli_bin {
            config.programs.zcli = zcli.clone();
        }
        if overrides.no_shell_path {
            config.programs.resolve_shell_path = false;
        }
    }

    /// Get documentation for supported environment variables
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "ZAIA_MCP_ZAIA_BIN - Override the zaia binary (default: zaia)",
            "ZAIA_MCP_ZCLI_BIN - Override the zcli binary (default: zcli)",
            "ZAIA_MCP_RESOLVE_SHELL_PATH - Use the login shell's PATH (true/false, default: true)",
            "ZAIA_MCP_LOG_LEVEL - Override the log level (default: info)",
            "ZAIA_MCP_LOG_DIR - Write logs to this directory (enables the file sink)",
        ]
    }
}
