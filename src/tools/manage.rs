use super::{require, Argv, Tool};
use crate::core::error::ToolFailure;
use crate::core::types::{Hint, ToolHints};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ManageAction {
    Start,
    Stop,
    Restart,
    Scale,
}

impl ManageAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ManageAction::Start => "start",
            ManageAction::Stop => "stop",
            ManageAction::Restart => "restart",
            ManageAction::Scale => "scale",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CpuMode {
    Shared,
    Dedicated,
}

impl CpuMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CpuMode::Shared => "SHARED",
            CpuMode::Dedicated => "DEDICATED",
        }
    }
}

/// Scaling parameters are ignored unless `action` is `scale`.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManageInput {
    pub action: ManageAction,
    pub service_hostname: String,
    #[serde(default)]
    pub cpu_mode: Option<CpuMode>,
    #[serde(default)]
    pub min_cpu: Option<i64>,
    #[serde(default)]
    pub max_cpu: Option<i64>,
    /// GB.
    #[serde(default)]
    pub min_ram: Option<f64>,
    #[serde(default)]
    pub max_ram: Option<f64>,
    /// GB.
    #[serde(default)]
    pub min_disk: Option<f64>,
    #[serde(default)]
    pub max_disk: Option<f64>,
    #[serde(default)]
    pub start_containers: Option<i64>,
    #[serde(default)]
    pub min_containers: Option<i64>,
    #[serde(default)]
    pub max_containers: Option<i64>,
}

pub struct Manage;

impl Tool for Manage {
    type Input = ManageInput;

    const NAME: &'static str = "zerops_manage";
    const TITLE: &'static str = "Manage Service";
    const DESCRIPTION: &'static str = "Manage service lifecycle and scaling.

Actions:
- start: start a stopped service
- stop: stop a running service
- restart: restart a service
- scale: change CPU, RAM, disk or container limits

Scale parameters (action=scale only):
- cpuMode: SHARED or DEDICATED
- minCpu/maxCpu, minRam/maxRam, minDisk/maxDisk
- startContainers, minContainers, maxContainers

Returns process IDs to track with zerops_process.";
    const HINTS: ToolHints = ToolHints::NONE.destructive(Hint::Yes);

    fn args(input: ManageInput) -> Result<Vec<String>, ToolFailure> {
        require("serviceHostname", &input.service_hostname)?;
        let argv = Argv::new(input.action.as_str()).flag("--service", input.service_hostname);
        if input.action != ManageAction::Scale {
            return Ok(argv.build());
        }

        Ok(argv
            .opt("--cpu-mode", input.cpu_mode.map(CpuMode::as_str))
            .count("--min-cpu", input.min_cpu)
            .count("--max-cpu", input.max_cpu)
            .amount("--min-ram", input.min_ram)
            .amount("--max-ram", input.max_ram)
            .amount("--min-disk", input.min_disk)
            .amount("--max-disk", input.max_disk)
            .count("--start-containers", input.start_containers)
            .count("--min-containers", input.min_containers)
            .count("--max-containers", input.max_containers)
            .build())
    }
}
