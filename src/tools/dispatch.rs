use super::ToolCatalog;
use crate::core::convert::{self, ToolResponse};
use crate::core::executor::Executor;
use rmcp::model::JsonObject;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

/// Routes a tool call through validation, the runner and the converter.
#[derive(Clone)]
pub struct Dispatcher {
    catalog: Arc<ToolCatalog>,
    executor: Arc<dyn Executor>,
}

impl Dispatcher {
    pub fn new(executor: Arc<dyn Executor>) -> Self {
        Self::with_catalog(ToolCatalog::standard(), executor)
    }

    pub fn with_catalog(catalog: ToolCatalog, executor: Arc<dyn Executor>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            executor,
        }
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    pub fn executor(&self) -> &Arc<dyn Executor> {
        &self.executor
    }

    /// Run the named tool. `None` means the name is not in the catalogue;
    /// every other outcome, failures included, is a response.
    pub async fn call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
        cancel: &CancellationToken,
    ) -> Option<ToolResponse> {
        let entry = self.catalog.get(name)?;

        let invocation = match entry.invocation(Value::Object(arguments.unwrap_or_default())) {
            Ok(invocation) => invocation,
            Err(failure) => {
                tracing::debug!(tool = name, error = %failure, "rejected tool input");
                return Some(failure.into());
            }
        };

        tracing::debug!(
            tool = name,
            program = %invocation.program,
            args = ?invocation.args,
            "running tool"
        );
        let started = Instant::now();
        let outcome = self
            .executor
            .run(invocation.program, &invocation.args, cancel)
            .await;
        if let Ok(result) = &outcome {
            tracing::debug!(tool = name, exit_code = result.exit_code, "CLI exited");
        }

        let response = convert::from_outcome(outcome);
        tracing::info!(
            tool = name,
            program = %invocation.program,
            is_error = response.is_error,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "tool call finished"
        );
        Some(response)
    }
}
