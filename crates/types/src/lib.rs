//! Shared vocabulary for the zaia MCP bridge: which program a tool targets,
//! the status of a long-running process and the tri-state tool hints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// External program a tool invocation is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Program {
    /// The zaia CLI: subcommand first, then flags.
    Zaia,
    /// The zcli CLI, used for code deployment only.
    Zcli,
}

impl Program {
    pub fn default_binary(self) -> &'static str {
        match self {
            Program::Zaia => "zaia",
            Program::Zcli => "zcli",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_binary())
    }
}

/// Status of an asynchronous platform process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessStatus {
    Pending,
    Running,
    Finished,
    Failed,
    Canceled,
}

impl ProcessStatus {
    /// Terminal statuses never transition again.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ProcessStatus::Finished | ProcessStatus::Failed | ProcessStatus::Canceled
        )
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProcessStatus::Pending => "PENDING",
            ProcessStatus::Running => "RUNNING",
            ProcessStatus::Finished => "FINISHED",
            ProcessStatus::Failed => "FAILED",
            ProcessStatus::Canceled => "CANCELED",
        };
        f.write_str(label)
    }
}

/// One entry of an `async` envelope's `processes` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDescriptor {
    pub process_id: String,
    pub status: ProcessStatus,
}

/// Optional boolean annotation. `Unset` is distinct from `No` on the wire:
/// unset hints are omitted, `No` is sent as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hint {
    #[default]
    Unset,
    Yes,
    No,
}

impl Hint {
    pub fn as_option(self) -> Option<bool> {
        match self {
            Hint::Unset => None,
            Hint::Yes => Some(true),
            Hint::No => Some(false),
        }
    }

    pub fn is_set(self) -> bool {
        !matches!(self, Hint::Unset)
    }
}

impl From<Option<bool>> for Hint {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Hint::Unset,
            Some(true) => Hint::Yes,
            Some(false) => Hint::No,
        }
    }
}

impl From<Hint> for Option<bool> {
    fn from(hint: Hint) -> Self {
        hint.as_option()
    }
}

/// Static behavioral hints attached to a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolHints {
    pub read_only: Hint,
    pub destructive: Hint,
    pub idempotent: Hint,
    pub open_world: Hint,
}

impl ToolHints {
    pub const NONE: ToolHints = ToolHints {
        read_only: Hint::Unset,
        destructive: Hint::Unset,
        idempotent: Hint::Unset,
        open_world: Hint::Unset,
    };

    /// Read-only, idempotent query.
    pub const fn query() -> Self {
        ToolHints {
            read_only: Hint::Yes,
            idempotent: Hint::Yes,
            ..ToolHints::NONE
        }
    }

    pub const fn closed_world(mut self) -> Self {
        self.open_world = Hint::No;
        self
    }

    pub const fn destructive(mut self, hint: Hint) -> Self {
        self.destructive = hint;
        self
    }

    pub const fn idempotent(mut self) -> Self {
        self.idempotent = Hint::Yes;
        self
    }
}
