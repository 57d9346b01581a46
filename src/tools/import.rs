use super::{Argv, Tool};
use crate::core::error::ToolFailure;
use crate::core::types::{Hint, ToolHints};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportInput {
    /// Inline import YAML.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    /// Validate and preview without creating anything.
    #[serde(default)]
    pub dry_run: bool,
}

pub struct Import;

impl Tool for Import {
    type Input = ImportInput;

    const NAME: &'static str = "zerops_import";
    const TITLE: &'static str = "Import Services";
    const DESCRIPTION: &'static str = "Import services from YAML into the current project.

The YAML holds a 'services:' array and must not contain a 'project:' section.
Pass exactly one of content or filePath. dryRun=true previews the result
synchronously.

Example:
  services:
    - hostname: api
      type: nodejs@22
      minContainers: 1
    - hostname: db
      type: postgresql@16

Returns process IDs to track with zerops_process.";
    const HINTS: ToolHints = ToolHints::NONE.destructive(Hint::No);

    fn args(input: ImportInput) -> Result<Vec<String>, ToolFailure> {
        let content = input.content.filter(|c| !c.is_empty());
        let file_path = input.file_path.filter(|f| !f.is_empty());

        let argv = match (content, file_path) {
            (Some(content), None) => Argv::new("import").flag("--content", content),
            (None, Some(file_path)) => Argv::new("import").flag("--file", file_path),
            (None, None) => {
                return Err(ToolFailure::invalid_input("content or filePath is required"))
            }
            (Some(_), Some(_)) => {
                return Err(ToolFailure::invalid_input(
                    "provide either content or filePath, not both",
                ))
            }
        };
        Ok(argv.switch("--dry-run", input.dry_run).build())
    }
}
