use super::ServerConfig;
use crate::core::error::ConfigError;
use std::str::FromStr;
use tracing_subscriber::filter::Directive;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration rules
    pub fn validate(config: &ServerConfig) -> Result<(), ConfigError> {
        if config.programs.zaia.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "programs.zaia cannot be empty".to_string(),
            ));
        }

        if config.programs.zcli.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "programs.zcli cannot be empty".to_string(),
            ));
        }

        Directive::from_str(&config.logging.default_level).map_err(|_| {
            ConfigError::Invalid(
                "logging.default_level must be a valid tracing directive".to_string(),
            )
        })?;

        Ok(())
    }
}
