use super::{require, Argv, Tool};
use crate::core::error::ToolFailure;
use crate::core::types::{Hint, ToolHints};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteInput {
    pub service_hostname: String,
    /// Must be true.
    #[serde(default)]
    pub confirm: bool,
}

pub struct Delete;

impl Tool for Delete {
    type Input = DeleteInput;

    const NAME: &'static str = "zerops_delete";
    const TITLE: &'static str = "Delete Service";
    const DESCRIPTION: &'static str = "Delete a service from the project.

Destructive: the service and all of its data are removed. The project itself
is never deleted.

Parameters:
- serviceHostname (required)
- confirm (required, must be true)

Returns process IDs to track with zerops_process.";
    const HINTS: ToolHints = ToolHints::NONE.destructive(Hint::Yes);

    fn args(input: DeleteInput) -> Result<Vec<String>, ToolFailure> {
        require("serviceHostname", &input.service_hostname)?;
        if !input.confirm {
            return Err(ToolFailure::invalid_input(
                "confirm must be true to delete a service",
            ));
        }
        Ok(Argv::new("delete")
            .flag("--service", input.service_hostname)
            .arg("--confirm")
            .build())
    }
}
