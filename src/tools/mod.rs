//! # Tools
//!
//! Every exposed tool is a unit type implementing [`Tool`]: typed input, a
//! fixed target [`Program`] and a pure function from validated input to
//! argv. [`ToolCatalog`] erases the input types so tools can be listed and
//! looked up by name, and [`Dispatcher`] runs them.

pub mod argv;
pub mod dispatch;

pub mod delete;
pub mod deploy;
pub mod discover;
pub mod env;
pub mod import;
pub mod knowledge;
pub mod logs;
pub mod manage;
pub mod process;
pub mod subdomain;
pub mod validate;

pub use argv::Argv;
pub use dispatch::Dispatcher;

use crate::core::error::ToolFailure;
use crate::core::types::{Program, ToolHints};
use rmcp::model::{JsonObject, ToolAnnotations};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// One MCP tool backed by a CLI command.
pub trait Tool {
    type Input: DeserializeOwned + JsonSchema;

    const NAME: &'static str;
    const TITLE: &'static str;
    const DESCRIPTION: &'static str;
    const PROGRAM: Program = Program::Zaia;
    const HINTS: ToolHints;

    /// Validate the input and build argv. Must not perform I/O.
    fn args(input: Self::Input) -> Result<Vec<String>, ToolFailure>;
}

/// A validated command, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: Program,
    pub args: Vec<String>,
}

/// Deserialize raw arguments into `T::Input` and build argv.
pub fn build_args<T: Tool>(arguments: Value) -> Result<Vec<String>, ToolFailure> {
    let input: T::Input = serde_json::from_value(arguments)
        .map_err(|err| ToolFailure::invalid_input(format!("invalid {} arguments: {err}", T::NAME)))?;
    T::args(input)
}

/// Reject missing or empty required strings.
pub(crate) fn require(field: &str, value: &str) -> Result<(), ToolFailure> {
    if value.trim().is_empty() {
        return Err(ToolFailure::invalid_input(format!("{field} is required")));
    }
    Ok(())
}

/// Catalogue entry with the input type erased.
#[derive(Clone)]
pub struct ToolEntry {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub program: Program,
    pub hints: ToolHints,
    schema: Arc<JsonObject>,
    build: fn(Value) -> Result<Vec<String>, ToolFailure>,
}

impl ToolEntry {
    pub fn of<T: Tool>() -> Self {
        Self {
            name: T::NAME,
            title: T::TITLE,
            description: T::DESCRIPTION,
            program: T::PROGRAM,
            hints: T::HINTS,
            schema: input_schema::<T::Input>(),
            build: build_args::<T>,
        }
    }

    pub fn schema(&self) -> &Arc<JsonObject> {
        &self.schema
    }

    pub fn invocation(&self, arguments: Value) -> Result<Invocation, ToolFailure> {
        Ok(Invocation {
            program: self.program,
            args: (self.build)(arguments)?,
        })
    }

    pub fn annotations(&self) -> ToolAnnotations {
        let mut annotations = ToolAnnotations::new();
        annotations.title = Some(self.title.to_string());
        annotations.read_only_hint = self.hints.read_only.as_option();
        annotations.destructive_hint = self.hints.destructive.as_option();
        annotations.idempotent_hint = self.hints.idempotent.as_option();
        annotations.open_world_hint = self.hints.open_world.as_option();
        annotations
    }

    pub fn to_tool(&self) -> rmcp::model::Tool {
        let mut tool = rmcp::model::Tool::new(self.name, self.description, self.schema.clone());
        tool.annotations = Some(self.annotations());
        tool
    }

    pub fn summary(&self) -> ToolSummary {
        ToolSummary {
            name: self.name,
            program: self.program,
            title: self.title,
            read_only: self.hints.read_only.as_option(),
            destructive: self.hints.destructive.as_option(),
            idempotent: self.hints.idempotent.as_option(),
            open_world: self.hints.open_world.as_option(),
        }
    }
}

impl std::fmt::Debug for ToolEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolEntry")
            .field("name", &self.name)
            .field("program", &self.program)
            .field("hints", &self.hints)
            .finish_non_exhaustive()
    }
}

/// Printable catalogue row for `zaia-mcp tools`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSummary {
    pub name: &'static str,
    pub program: Program,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destructive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_world: Option<bool>,
}

/// The fixed set of exposed tools.
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    entries: Vec<ToolEntry>,
}

impl ToolCatalog {
    pub fn standard() -> Self {
        Self {
            entries: vec![
                ToolEntry::of::<discover::Discover>(),
                ToolEntry::of::<logs::Logs>(),
                ToolEntry::of::<validate::Validate>(),
                ToolEntry::of::<knowledge::Knowledge>(),
                ToolEntry::of::<process::Process>(),
                ToolEntry::of::<manage::Manage>(),
                ToolEntry::of::<env::Env>(),
                ToolEntry::of::<import::Import>(),
                ToolEntry::of::<delete::Delete>(),
                ToolEntry::of::<subdomain::Subdomain>(),
                ToolEntry::of::<deploy::Deploy>(),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<&ToolEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.name).collect()
    }

    pub fn to_tools(&self) -> Vec<rmcp::model::Tool> {
        self.entries.iter().map(ToolEntry::to_tool).collect()
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn input_schema<T: JsonSchema>() -> Arc<JsonObject> {
    let schema = schemars::schema_for!(T);
    match serde_json::to_value(schema) {
        Ok(Value::Object(mut object)) => {
            object.remove("$schema");
            Arc::new(object)
        }
        _ => {
            let mut object = JsonObject::new();
            object.insert("type".to_string(), Value::String("object".to_string()));
            Arc::new(object)
        }
    }
}
