use super::{require, Argv, Tool};
use crate::core::error::ToolFailure;
use crate::core::types::ToolHints;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogsInput {
    pub service_hostname: String,
    /// error, warning, info or debug.
    #[serde(default)]
    pub severity: Option<String>,
    /// Time range such as 30m, 1h, 24h, 7d or an ISO 8601 timestamp.
    #[serde(default)]
    pub since: Option<String>,
    /// Maximum number of entries.
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub search: Option<String>,
    /// Fetch the logs of this build instead of runtime logs.
    #[serde(default)]
    pub build_id: Option<String>,
}

pub struct Logs;

impl Tool for Logs {
    type Input = LogsInput;

    const NAME: &'static str = "zerops_logs";
    const TITLE: &'static str = "Fetch Logs";
    const DESCRIPTION: &'static str = "Fetch logs of a Zerops service.

Parameters:
- serviceHostname (required)
- severity: error, warning, info or debug
- since: 30m, 1h, 24h, 7d or ISO 8601
- limit: maximum entries (CLI default 100)
- search: text filter
- buildId: return build logs instead";
    const HINTS: ToolHints = ToolHints::query();

    fn args(input: LogsInput) -> Result<Vec<String>, ToolFailure> {
        require("serviceHostname", &input.service_hostname)?;
        Ok(Argv::new("logs")
            .flag("--service", input.service_hostname)
            .opt("--severity", input.severity.as_deref())
            .opt("--since", input.since.as_deref())
            .count("--limit", input.limit)
            .opt("--search", input.search.as_deref())
            .opt("--build", input.build_id.as_deref())
            .build())
    }
}
