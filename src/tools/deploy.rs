use super::{Argv, Tool};
use crate::core::error::ToolFailure;
use crate::core::types::{Hint, Program, ToolHints};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeployInput {
    /// Directory containing zerops.yml.
    #[serde(default)]
    pub working_dir: Option<String>,
    /// Target service; read from zerops.yml when omitted.
    #[serde(default)]
    pub service_id: Option<String>,
}

/// `zcli push`. The only tool that does not go through zaia.
pub struct Deploy;

impl Tool for Deploy {
    type Input = DeployInput;

    const NAME: &'static str = "zerops_deploy";
    const TITLE: &'static str = "Deploy Code";
    const DESCRIPTION: &'static str = "Deploy code to a Zerops service with zcli push.

Uses the zerops.yml in the working directory and needs its own zcli
authentication.

Parameters:
- workingDir: directory containing zerops.yml (optional)
- serviceId: target service ID (optional, read from zerops.yml)

Returns deployment process information.";
    const PROGRAM: Program = Program::Zcli;
    const HINTS: ToolHints = ToolHints::NONE.destructive(Hint::No);

    fn args(input: DeployInput) -> Result<Vec<String>, ToolFailure> {
        Ok(Argv::new("push")
            .opt("--serviceId", input.service_id.as_deref())
            .opt("--workingDir", input.working_dir.as_deref())
            .build())
    }
}
