#![cfg(unix)]

use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use zaia_mcp::core::error::RunError;
use zaia_mcp::core::executor::{CliExecutor, Executor};
use zaia_mcp::core::types::Program;
use zaia_mcp::utils::env::ProcessEnv;

fn shell_executor() -> CliExecutor {
    CliExecutor::with_env("/bin/sh", "/bin/sh", ProcessEnv::inherited())
}

fn script(body: &str) -> Vec<String> {
    vec!["-c".to_string(), body.to_string()]
}

#[tokio::test]
async fn test_captures_stdout_stderr_and_exit_code() {
    let executor = shell_executor();
    let result = executor
        .run_zaia(
            &script(r#"printf '{"type":"sync","data":1}'; printf 'warn' >&2; exit 3"#),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(result.stdout, br#"{"type":"sync","data":1}"#.to_vec());
    assert_eq!(result.stderr_lossy(), "warn");
    assert_eq!(result.exit_code, 3);
}

#[tokio::test]
async fn test_arguments_are_not_shell_split() {
    let executor = shell_executor();
    let args = vec![
        "-c".to_string(),
        r#"printf '%s|' "$@""#.to_string(),
        "sh".to_string(),
        "two words".to_string(),
        "$HOME".to_string(),
    ];
    let result = executor
        .run_zcli(&args, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(String::from_utf8(result.stdout).unwrap(), "two words|$HOME|");
}

#[tokio::test]
async fn test_child_sees_only_the_prepared_environment() {
    let path = std::env::var_os("PATH").unwrap_or_default();
    let env = ProcessEnv::from_vars([
        ("PATH", path),
        ("ZAIA_TEST_MARKER", std::ffi::OsString::from("marker")),
    ]);
    let executor = CliExecutor::with_env("/bin/sh", "/bin/sh", env);
    let result = executor
        .run_zaia(
            &script(r#"printf '%s:%s' "$ZAIA_TEST_MARKER" "${CARGO_PKG_NAME:-unset}""#),
            &CancellationToken::new(),
        )
        .await
        .unwrap();
    assert_eq!(String::from_utf8(result.stdout).unwrap(), "marker:unset");
}

#[tokio::test]
async fn test_missing_binary_is_launch_error() {
    let executor = CliExecutor::with_env(
        "/nonexistent/zaia-binary",
        "zcli",
        ProcessEnv::inherited(),
    );
    let err = executor
        .run_zaia(&["discover".to_string()], &CancellationToken::new())
        .await
        .unwrap_err();
    match err {
        RunError::Launch {
            program, binary, ..
        } => {
            assert_eq!(program, Program::Zaia);
            assert_eq!(binary, "/nonexistent/zaia-binary");
        }
        other => panic!("expected launch error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cancellation_kills_running_child() {
    let executor = shell_executor();
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let started = Instant::now();
    let err = executor
        .run_zaia(&script("exec sleep 30"), &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, RunError::Cancelled));
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn test_already_cancelled_token_spawns_nothing() {
    let executor =
        CliExecutor::with_env("/nonexistent/zaia-binary", "zcli", ProcessEnv::inherited());
    let cancel = CancellationToken::new();
    cancel.cancel();
    let err = executor.run_zaia(&[], &cancel).await.unwrap_err();
    assert!(matches!(err, RunError::Cancelled));
}

#[tokio::test]
async fn test_run_dispatches_on_program() {
    let executor = CliExecutor::with_env("/bin/false", "/bin/sh", ProcessEnv::inherited());
    let result = executor
        .run(Program::Zcli, &script("printf zcli"), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(result.stdout, b"zcli".to_vec());
    assert_eq!(result.exit_code, 0);
}
