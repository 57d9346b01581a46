use super::{require, Argv, Tool};
use crate::core::error::ToolFailure;
use crate::core::types::ToolHints;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeInput {
    /// Keywords, e.g. "postgresql connection string".
    pub query: String,
    #[serde(default)]
    pub limit: Option<i64>,
}

pub struct Knowledge;

impl Tool for Knowledge {
    type Input = KnowledgeInput;

    const NAME: &'static str = "zerops_knowledge";
    const TITLE: &'static str = "Search Knowledge";
    const DESCRIPTION: &'static str = "Search the Zerops knowledge base.

Keyword search (BM25), so prefer specific terms:
- service names: postgresql, nodejs, valkey
- config: zerops.yml, import.yml, build
- errors: redirect loop, connection refused

The best match is returned with its full content. Other hits can be read
through the zerops://docs/ resources.";
    const HINTS: ToolHints = ToolHints::query().closed_world();

    fn args(input: KnowledgeInput) -> Result<Vec<String>, ToolFailure> {
        require("query", &input.query)?;
        Ok(Argv::new("search")
            .arg(input.query)
            .count("--limit", input.limit)
            .build())
    }
}
