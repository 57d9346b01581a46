//! # Process runner
//!
//! Runs the external CLIs and captures what they print. The CLIs report
//! success and failure inside a JSON envelope on stdout, so the exit code is
//! recorded but never interpreted here.

mod cli;
mod mock;

pub use cli::CliExecutor;
pub use mock::{
    async_result, error_result, sync_result, MockCall, MockExecutor, MockResponse,
};

use crate::core::error::RunError;
use crate::core::types::Program;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Raw outcome of one CLI invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub exit_code: i32,
}

impl ExecutionResult {
    pub fn new(stdout: impl Into<Vec<u8>>, stderr: impl Into<Vec<u8>>, exit_code: i32) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code,
        }
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// How the bridge calls the CLIs.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Run `zaia <args...>`.
    async fn run_zaia(
        &self,
        args: &[String],
        cancel: &CancellationToken,
    ) -> Result<ExecutionResult, RunError>;

    /// Run `zcli <args...>`.
    async fn run_zcli(
        &self,
        args: &[String],
        cancel: &CancellationToken,
    ) -> Result<ExecutionResult, RunError>;

    async fn run(
        &self,
        program: Program,
        args: &[String],
        cancel: &CancellationToken,
    ) -> Result<ExecutionResult, RunError> {
        match program {
            Program::Zaia => self.run_zaia(args, cancel).await,
            Program::Zcli => self.run_zcli(args, cancel).await,
        }
    }
}
