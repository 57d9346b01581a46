use super::{require, Argv, Tool};
use crate::core::error::ToolFailure;
use crate::core::types::ToolHints;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProcessAction {
    #[default]
    Status,
    Cancel,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInput {
    pub process_id: String,
    #[serde(default)]
    pub action: ProcessAction,
}

pub struct Process;

impl Tool for Process {
    type Input = ProcessInput;

    const NAME: &'static str = "zerops_process";
    const TITLE: &'static str = "Check Process";
    const DESCRIPTION: &'static str = "Check or cancel an asynchronous process.

Actions:
- status (default): current status of the process
- cancel: cancel a pending or running process

Long-running tools return process IDs; poll them here until the status is
terminal. Statuses: PENDING, RUNNING, FINISHED, FAILED, CANCELED.";
    const HINTS: ToolHints = ToolHints::query();

    fn args(input: ProcessInput) -> Result<Vec<String>, ToolFailure> {
        require("processId", &input.process_id)?;
        let subcommand = match input.action {
            ProcessAction::Status => "process",
            ProcessAction::Cancel => "cancel",
        };
        Ok(Argv::new(subcommand).arg(input.process_id).build())
    }
}
