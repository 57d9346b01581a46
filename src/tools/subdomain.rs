use super::{require, Argv, Tool};
use crate::core::error::ToolFailure;
use crate::core::types::{Hint, ToolHints};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubdomainAction {
    Enable,
    Disable,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubdomainInput {
    pub service_hostname: String,
    pub action: SubdomainAction,
}

pub struct Subdomain;

impl Tool for Subdomain {
    type Input = SubdomainInput;

    const NAME: &'static str = "zerops_subdomain";
    const TITLE: &'static str = "Manage Subdomain";
    const DESCRIPTION: &'static str = "Enable or disable the zerops.app subdomain of a service.

Actions:
- enable: create a *.zerops.app subdomain
- disable: remove it

Idempotent: enabling an already enabled subdomain succeeds.";
    const HINTS: ToolHints = ToolHints::NONE.destructive(Hint::No).idempotent();

    fn args(input: SubdomainInput) -> Result<Vec<String>, ToolFailure> {
        require("serviceHostname", &input.service_hostname)?;
        let action = match input.action {
            SubdomainAction::Enable => "enable",
            SubdomainAction::Disable => "disable",
        };
        Ok(Argv::new("subdomain")
            .arg(action)
            .flag("--service", input.service_hostname)
            .build())
    }
}
