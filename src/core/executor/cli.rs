use super::{ExecutionResult, Executor};
use crate::core::error::RunError;
use crate::core::types::Program;
use crate::utils::env::ProcessEnv;
use async_trait::async_trait;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Instant;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;

/// Production executor spawning the real binaries.
#[derive(Debug, Clone)]
pub struct CliExecutor {
    zaia_binary: String,
    zcli_binary: String,
    env: Arc<ProcessEnv>,
}

impl CliExecutor {
    /// Build an executor with the login-shell `PATH` resolved once, now.
    /// Empty binary names fall back to `zaia` and `zcli`.
    pub fn new(zaia_binary: &str, zcli_binary: &str) -> Self {
        Self::with_env(zaia_binary, zcli_binary, ProcessEnv::resolve())
    }

    pub fn with_env(zaia_binary: &str, zcli_binary: &str, env: ProcessEnv) -> Self {
        Self {
            zaia_binary: binary_or_default(zaia_binary, Program::Zaia),
            zcli_binary: binary_or_default(zcli_binary, Program::Zcli),
            env: Arc::new(env),
        }
    }

    pub fn binary(&self, program: Program) -> &str {
        match program {
            Program::Zaia => &self.zaia_binary,
            Program::Zcli => &self.zcli_binary,
        }
    }

    pub fn env(&self) -> &ProcessEnv {
        &self.env
    }

    async fn spawn(
        &self,
        program: Program,
        args: &[String],
        cancel: &CancellationToken,
    ) -> Result<ExecutionResult, RunError> {
        if cancel.is_cancelled() {
            return Err(RunError::Cancelled);
        }

        let binary = self.binary(program);
        let mut command = Command::new(binary);
        command
            .args(args)
            .env_clear()
            .envs(self.env.iter())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let launch_error = |source: std::io::Error| RunError::Launch {
            program,
            binary: binary.to_string(),
            source,
        };

        let child = command.spawn().map_err(launch_error)?;
        tracing::debug!(%program, binary, ?args, pid = ?child.id(), "spawned CLI process");

        let started = Instant::now();
        // Dropping the wait future drops the child, which kills it.
        let output = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::info!(%program, elapsed_ms = started.elapsed().as_millis() as u64, "CLI process cancelled");
                return Err(RunError::Cancelled);
            }
            output = child.wait_with_output() => output.map_err(launch_error)?,
        };

        // Killed by a signal: no exit code to report.
        let exit_code = output.status.code().unwrap_or(-1);
        tracing::debug!(
            %program,
            exit_code,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "CLI process finished"
        );

        Ok(ExecutionResult {
            stdout: output.stdout,
            stderr: output.stderr,
            exit_code,
        })
    }
}

#[async_trait]
impl Executor for CliExecutor {
    async fn run_zaia(
        &self,
        args: &[String],
        cancel: &CancellationToken,
    ) -> Result<ExecutionResult, RunError> {
        self.spawn(Program::Zaia, args, cancel).await
    }

    async fn run_zcli(
        &self,
        args: &[String],
        cancel: &CancellationToken,
    ) -> Result<ExecutionResult, RunError> {
        self.spawn(Program::Zcli, args, cancel).await
    }
}

fn binary_or_default(binary: &str, program: Program) -> String {
    if binary.trim().is_empty() {
        program.default_binary().to_string()
    } else {
        binary.to_string()
    }
}
