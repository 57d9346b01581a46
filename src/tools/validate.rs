use super::{Argv, Tool};
use crate::core::error::ToolFailure;
use crate::core::types::ToolHints;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateInput {
    /// Inline YAML. Used when both content and filePath are given.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    /// zerops.yml or import.yml; detected when omitted.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

pub struct Validate;

impl Tool for Validate {
    type Input = ValidateInput;

    const NAME: &'static str = "zerops_validate";
    const TITLE: &'static str = "Validate Config";
    const DESCRIPTION: &'static str = "Validate a zerops.yml or import.yml.

Checks YAML syntax, required fields, service types and versions, port ranges
and common mistakes. In a project-scoped context import.yml must not contain a
'project:' section.

Returns the problems found together with fix suggestions.";
    const HINTS: ToolHints = ToolHints::query().closed_world();

    fn args(input: ValidateInput) -> Result<Vec<String>, ToolFailure> {
        let content = input.content.filter(|c| !c.is_empty());
        let file_path = input.file_path.filter(|f| !f.is_empty());

        let argv = match (content, file_path) {
            (Some(content), _) => Argv::new("validate").flag("--content", content),
            (None, Some(file_path)) => Argv::new("validate").flag("--file", file_path),
            (None, None) => {
                return Err(ToolFailure::invalid_input("content or filePath is required"))
            }
        };
        Ok(argv.opt("--type", input.kind.as_deref()).build())
    }
}
