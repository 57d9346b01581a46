use super::{Argv, Tool};
use crate::core::error::ToolFailure;
use crate::core::types::ToolHints;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverInput {
    /// Limit the result to one service hostname.
    #[serde(default)]
    pub service: Option<String>,
    /// Include environment variables per service.
    #[serde(default)]
    pub include_envs: bool,
}

pub struct Discover;

impl Tool for Discover {
    type Input = DiscoverInput;

    const NAME: &'static str = "zerops_discover";
    const TITLE: &'static str = "Discover Services";
    const DESCRIPTION: &'static str = "Discover services in the current Zerops project.

Call this first to learn the service hostnames other tools expect.

Returns:
- project: id, name and status
- services: hostname, type and status of each service
- optionally the env vars of each service";
    const HINTS: ToolHints = ToolHints::query();

    fn args(input: DiscoverInput) -> Result<Vec<String>, ToolFailure> {
        Ok(Argv::new("discover")
            .opt("--service", input.service.as_deref())
            .switch("--include-envs", input.include_envs)
            .build())
    }
}
