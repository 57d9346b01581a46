//! Maps envelopes and runner failures onto tool responses.
//!
//! Nothing here returns an error: every outcome becomes a [`ToolResponse`],
//! with failures carried as a serialized [`ToolFailure`].

use crate::core::envelope::{DomainError, Envelope};
use crate::core::error::{codes, RunError, ToolFailure};
use crate::core::executor::ExecutionResult;
use rmcp::model::{CallToolResult, Content};
use serde_json::json;

/// Error flag plus one text payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResponse {
    pub is_error: bool,
    pub text: String,
}

impl ToolResponse {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            is_error: false,
            text: text.into(),
        }
    }

    pub fn failure(failure: &ToolFailure) -> Self {
        Self {
            is_error: true,
            text: failure.to_json(),
        }
    }
}

impl From<ToolFailure> for ToolResponse {
    fn from(failure: ToolFailure) -> Self {
        ToolResponse::failure(&failure)
    }
}

impl From<ToolResponse> for CallToolResult {
    fn from(response: ToolResponse) -> Self {
        let content = vec![Content::text(response.text)];
        if response.is_error {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }
}

impl From<DomainError> for ToolFailure {
    fn from(err: DomainError) -> Self {
        ToolFailure {
            code: err.code,
            message: err.message,
            suggestion: err.suggestion,
            context: err.context,
        }
    }
}

/// Convert a parsed envelope. Payloads are forwarded byte-for-byte.
pub fn from_envelope(envelope: Envelope) -> ToolResponse {
    match envelope {
        Envelope::Sync { data, .. } => ToolResponse::success(data.get()),
        Envelope::Async { processes, .. } => ToolResponse::success(processes.get()),
        Envelope::Error(err) => {
            tracing::debug!(code = %err.code, message = %err.message, "CLI reported domain error");
            ToolFailure::from(err).into()
        }
        Envelope::Unknown { kind } => {
            tracing::warn!(kind = %kind, "CLI returned unknown envelope type");
            ToolFailure::new(
                codes::UNKNOWN_RESPONSE_TYPE,
                format!("Unknown CLI response type: {kind}"),
            )
            .with_context(json!({ "type": kind }))
            .into()
        }
    }
}

/// Parse captured output and convert it.
pub fn from_execution(result: &ExecutionResult) -> ToolResponse {
    match Envelope::parse(result) {
        Ok(envelope) => from_envelope(envelope),
        Err(err) => {
            tracing::warn!(exit_code = result.exit_code, error = %err, "unreadable CLI output");
            ToolFailure::from(err).into()
        }
    }
}

/// Convert whatever the runner produced.
pub fn from_outcome(outcome: Result<ExecutionResult, RunError>) -> ToolResponse {
    match outcome {
        Ok(result) => from_execution(&result),
        Err(RunError::Cancelled) => {
            tracing::info!("CLI execution cancelled");
            ToolFailure::from(RunError::Cancelled).into()
        }
        Err(err) => {
            tracing::warn!(error = %err, "CLI execution failed");
            ToolFailure::from(err).into()
        }
    }
}
