use super::{ExecutionResult, Executor};
use crate::core::error::RunError;
use crate::core::types::Program;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// One recorded executor call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub program: Program,
    pub args: Vec<String>,
}

impl MockCall {
    /// `"<binary> <args...>"`, for assertion messages only. Argument
    /// boundaries are lost here; compare `args` when they matter.
    pub fn command_line(&self) -> String {
        let mut line = self.program.default_binary().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Scripted reply for a command.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Result(ExecutionResult),
    Error(String),
}

type CommandKey = (Program, Vec<String>);

#[derive(Default)]
struct MockState {
    responses: HashMap<CommandKey, VecDeque<MockResponse>>,
    default_response: Option<ExecutionResult>,
    calls: Vec<MockCall>,
}

/// Executor returning scripted results, for tests.
///
/// Commands are matched on the program and the exact argument vector, so
/// `["A=1 B=2"]` and `["A=1", "B=2"]` are different commands. There is no
/// prefix matching. A command registered with several responses returns them
/// in order and keeps returning the last one. Unmatched commands fall back to
/// the default response, or fail when none is set.
#[derive(Default)]
pub struct MockExecutor {
    state: Mutex<MockState>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// `args` is the argv after the binary name, one element per argument.
    pub fn with_zaia_response(self, args: &[&str], result: ExecutionResult) -> Self {
        self.script(Program::Zaia, args, vec![MockResponse::Result(result)])
    }

    pub fn with_zcli_response(self, args: &[&str], result: ExecutionResult) -> Self {
        self.script(Program::Zcli, args, vec![MockResponse::Result(result)])
    }

    /// Successive results for repeated calls of the same zaia command.
    pub fn with_zaia_sequence(self, args: &[&str], results: Vec<ExecutionResult>) -> Self {
        let responses = results.into_iter().map(MockResponse::Result).collect();
        self.script(Program::Zaia, args, responses)
    }

    pub fn with_zaia_error(self, args: &[&str], message: &str) -> Self {
        self.script(
            Program::Zaia,
            args,
            vec![MockResponse::Error(message.to_string())],
        )
    }

    pub fn with_zcli_error(self, args: &[&str], message: &str) -> Self {
        self.script(
            Program::Zcli,
            args,
            vec![MockResponse::Error(message.to_string())],
        )
    }

    pub fn with_default(self, result: ExecutionResult) -> Self {
        self.lock().default_response = Some(result);
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    pub fn last_call(&self) -> Option<MockCall> {
        self.lock().calls.last().cloned()
    }

    fn script(self, program: Program, args: &[&str], responses: Vec<MockResponse>) -> Self {
        let key = (program, args.iter().map(|arg| arg.to_string()).collect());
        self.lock()
            .responses
            .insert(key, responses.into_iter().collect());
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        // A panicking test thread must not hide the recorded calls from others.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn resolve(
        &self,
        program: Program,
        args: &[String],
        cancel: &CancellationToken,
    ) -> Result<ExecutionResult, RunError> {
        let mut state = self.lock();
        let call = MockCall {
            program,
            args: args.to_vec(),
        };
        state.calls.push(call.clone());

        if cancel.is_cancelled() {
            return Err(RunError::Cancelled);
        }

        let key = (program, call.args.clone());
        if let Some(queue) = state.responses.get_mut(&key) {
            let response = if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            };
            if let Some(response) = response {
                return match response {
                    MockResponse::Result(result) => Ok(result),
                    MockResponse::Error(message) => Err(RunError::Scripted(message)),
                };
            }
        }

        match &state.default_response {
            Some(result) => Ok(result.clone()),
            None => Err(RunError::Scripted(format!(
                "mock: no response configured for {program} {:?}",
                call.args
            ))),
        }
    }
}

#[async_trait]
impl Executor for MockExecutor {
    async fn run_zaia(
        &self,
        args: &[String],
        cancel: &CancellationToken,
    ) -> Result<ExecutionResult, RunError> {
        self.resolve(Program::Zaia, args, cancel)
    }

    async fn run_zcli(
        &self,
        args: &[String],
        cancel: &CancellationToken,
    ) -> Result<ExecutionResult, RunError> {
        self.resolve(Program::Zcli, args, cancel)
    }
}

/// Result whose stdout is a `sync` envelope around `data` (raw JSON).
pub fn sync_result(data: &str) -> ExecutionResult {
    ExecutionResult::new(
        format!(r#"{{"type":"sync","status":"ok","data":{data}}}"#),
        Vec::new(),
        0,
    )
}

/// Result whose stdout is an `async` envelope around `processes` (raw JSON).
pub fn async_result(processes: &str) -> ExecutionResult {
    ExecutionResult::new(
        format!(r#"{{"type":"async","status":"initiated","processes":{processes}}}"#),
        Vec::new(),
        0,
    )
}

/// Result whose stdout is an `error` envelope. An empty suggestion is omitted.
pub fn error_result(code: &str, message: &str, suggestion: &str, exit_code: i32) -> ExecutionResult {
    let mut envelope = serde_json::json!({
        "type": "error",
        "code": code,
        "error": message,
    });
    if !suggestion.is_empty() {
        envelope["suggestion"] = serde_json::Value::String(suggestion.to_string());
    }
    ExecutionResult::new(envelope.to_string(), Vec::new(), exit_code)
}
