use crate::core::types::Program;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

/// Stable failure codes produced by the bridge itself. Domain errors keep the
/// code reported by the external program.
pub mod codes {
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const CLI_EXECUTION_FAILED: &str = "CLI_EXECUTION_FAILED";
    pub const CANCELLED: &str = "CANCELLED";
    pub const EMPTY_OUTPUT: &str = "EMPTY_OUTPUT";
    pub const MALFORMED_OUTPUT: &str = "MALFORMED_OUTPUT";
    pub const UNKNOWN_RESPONSE_TYPE: &str = "UNKNOWN_RESPONSE_TYPE";
}

/// Failure of the process runner itself. A non-zero exit code is not one.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("execution cancelled")]
    Cancelled,
    #[error("failed to launch {program} ({binary}): {source}")]
    Launch {
        program: Program,
        binary: String,
        #[source]
        source: std::io::Error,
    },
    /// Scripted failure returned by the mock executor.
    #[error("{0}")]
    Scripted(String),
}

/// Failure to read an envelope out of captured stdout.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("empty CLI output (exit code {exit_code}, stderr: {stderr})")]
    EmptyOutput { exit_code: i32, stderr: String },
    #[error("invalid CLI JSON output: {reason} (exit code {exit_code}, stderr: {stderr}, raw: {raw})")]
    Malformed {
        reason: String,
        exit_code: i32,
        stderr: String,
        raw: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{0}")]
    Invalid(String),
}

/// Failure payload carried by an error tool response.
///
/// Serializes as `{"code","error"[,"suggestion"][,"context"]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolFailure {
    pub code: String,
    #[serde(rename = "error")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl ToolFailure {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(codes::INVALID_INPUT, message)
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self
    }

    pub fn to_json(&self) -> String {
        // Serializing a struct of strings and a `Value` cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":"{}","error":"unserializable failure"}}"#, self.code)
        })
    }
}

impl fmt::Display for ToolFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<RunError> for ToolFailure {
    fn from(err: RunError) -> Self {
        match err {
            RunError::Cancelled => ToolFailure::new(codes::CANCELLED, "CLI execution cancelled"),
            RunError::Launch { ref program, .. } => {
                let suggestion = format!(
                    "Make sure `{}` is installed and reachable on PATH",
                    program.default_binary()
                );
                ToolFailure::new(
                    codes::CLI_EXECUTION_FAILED,
                    format!("CLI execution failed: {err}"),
                )
                .with_suggestion(suggestion)
            }
            RunError::Scripted(message) => ToolFailure::new(
                codes::CLI_EXECUTION_FAILED,
                format!("CLI execution failed: {message}"),
            ),
        }
    }
}

impl From<EnvelopeError> for ToolFailure {
    fn from(err: EnvelopeError) -> Self {
        let code = match err {
            EnvelopeError::EmptyOutput { .. } => codes::EMPTY_OUTPUT,
            EnvelopeError::Malformed { .. } => codes::MALFORMED_OUTPUT,
        };
        ToolFailure::new(code, format!("CLI execution error: {err}"))
    }
}
