use super::{Argv, Tool};
use crate::core::error::ToolFailure;
use crate::core::types::{Hint, ToolHints};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnvAction {
    Get,
    Set,
    Delete,
}

impl EnvAction {
    pub fn as_str(self) -> &'static str {
        match self {
            EnvAction::Get => "get",
            EnvAction::Set => "set",
            EnvAction::Delete => "delete",
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvInput {
    pub action: EnvAction,
    #[serde(default)]
    pub service_hostname: Option<String>,
    /// Target project-level variables.
    #[serde(default)]
    pub project: bool,
    /// `KEY=value` for set, `KEY` for delete.
    #[serde(default)]
    pub variables: Vec<String>,
}

pub struct Env;

impl Tool for Env {
    type Input = EnvInput;

    const NAME: &'static str = "zerops_env";
    const TITLE: &'static str = "Manage Env Vars";
    const DESCRIPTION: &'static str = "Manage environment variables.

Actions:
- get: read variables (synchronous)
- set: set variables (returns process IDs)
- delete: delete variables (returns process IDs)

Scope: serviceHostname for service variables, or project=true for project
variables.

Set: [\"KEY=value\", \"OTHER=value2\"]. Delete: [\"KEY\"].
Cross-service references use ${service_hostname} (underscore, not dash).";
    const HINTS: ToolHints = ToolHints::NONE.destructive(Hint::No);

    fn args(input: EnvInput) -> Result<Vec<String>, ToolFailure> {
        let service = input.service_hostname.filter(|s| !s.trim().is_empty());
        if service.is_none() && !input.project {
            return Err(ToolFailure::invalid_input(
                "serviceHostname or project=true is required",
            ));
        }

        Ok(Argv::new("env")
            .arg(input.action.as_str())
            .opt("--service", service.as_deref())
            .switch("--project", input.project)
            .args(input.variables)
            .build())
    }
}
