use rmcp::model::{CallToolResult, RawContent};
use serde_json::Value;
use zaia_mcp::core::convert::{self, ToolResponse};
use zaia_mcp::core::envelope::DIAGNOSTIC_LIMIT;
use zaia_mcp::core::error::{codes, RunError};
use zaia_mcp::core::executor::{error_result, ExecutionResult};
use zaia_mcp::core::types::Program;

fn failure_json(response: &ToolResponse) -> Value {
    assert!(response.is_error, "expected failure, got {response:?}");
    serde_json::from_str(&response.text).unwrap()
}

#[test]
fn test_sync_forwards_data_bytes() {
    let result = ExecutionResult::new(
        r#"{"type":"sync","status":"ok","data":{"services":[{"hostname":"api"}],"n":1.0}}"#,
        "",
        0,
    );
    let response = convert::from_execution(&result);
    assert_eq!(
        response,
        ToolResponse::success(r#"{"services":[{"hostname":"api"}],"n":1.0}"#)
    );
}

#[test]
fn test_async_forwards_processes_bytes() {
    let result = ExecutionResult::new(
        r#"{"type":"async","status":"initiated","processes":[{"processId":"proc-9","status":"PENDING"}]}"#,
        "",
        0,
    );
    let response = convert::from_execution(&result);
    assert!(!response.is_error);
    assert_eq!(
        response.text,
        r#"[{"processId":"proc-9","status":"PENDING"}]"#
    );
}

#[test]
fn test_domain_error_is_passed_through() {
    let result = error_result(
        "AUTH_REQUIRED",
        "Not authenticated",
        "Run: zaia login <token>",
        1,
    );
    let value = failure_json(&convert::from_execution(&result));
    assert_eq!(value["code"], "AUTH_REQUIRED");
    assert_eq!(value["error"], "Not authenticated");
    assert_eq!(value["suggestion"], "Run: zaia login <token>");
    assert!(value.get("context").is_none());
}

#[test]
fn test_domain_error_without_suggestion_omits_it() {
    let result = error_result("SERVICE_NOT_FOUND", "Service 'xyz' not found", "", 2);
    let response = convert::from_execution(&result);
    assert_eq!(
        response.text,
        r#"{"code":"SERVICE_NOT_FOUND","error":"Service 'xyz' not found"}"#
    );
}

#[test]
fn test_domain_error_context_is_kept() {
    let result = ExecutionResult::new(
        r#"{"type":"error","code":"INVALID_YAML","error":"bad","context":{"line":3}}"#,
        "",
        1,
    );
    let value = failure_json(&convert::from_execution(&result));
    assert_eq!(value["context"]["line"], 3);
}

#[test]
fn test_unknown_type_names_the_type() {
    let result = ExecutionResult::new(r#"{"type":"weird"}"#, "", 0);
    let value = failure_json(&convert::from_execution(&result));
    assert_eq!(value["code"], codes::UNKNOWN_RESPONSE_TYPE);
    assert!(value["error"].as_str().unwrap().contains("weird"));
}

#[test]
fn test_empty_output_carries_exit_code_and_stderr() {
    let result = ExecutionResult::new("", "panic: nil pointer", 2);
    let value = failure_json(&convert::from_execution(&result));
    assert_eq!(value["code"], codes::EMPTY_OUTPUT);
    let message = value["error"].as_str().unwrap();
    assert!(message.contains("exit code 2"));
    assert!(message.contains("panic: nil pointer"));
}

#[test]
fn test_malformed_output() {
    let result = ExecutionResult::new("not json", "", 0);
    let value = failure_json(&convert::from_execution(&result));
    assert_eq!(value["code"], codes::MALFORMED_OUTPUT);
    assert!(value["error"].as_str().unwrap().contains("not json"));
}

#[test]
fn test_oversized_output_keeps_failure_small() {
    let noise = "<html>".repeat(200_000);
    let result = ExecutionResult::new(noise.clone(), noise, 1);
    let value = failure_json(&convert::from_execution(&result));
    assert_eq!(value["code"], codes::MALFORMED_OUTPUT);
    let message = value["error"].as_str().unwrap();
    assert!(message.len() < 3 * DIAGNOSTIC_LIMIT);
    assert!(message.contains("truncated"));
}

#[test]
fn test_cancelled_outcome() {
    let value = failure_json(&convert::from_outcome(Err(RunError::Cancelled)));
    assert_eq!(value["code"], codes::CANCELLED);
}

#[test]
fn test_launch_failure_outcome() {
    let outcome = Err(RunError::Launch {
        program: Program::Zaia,
        binary: "zaia".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
    });
    let value = failure_json(&convert::from_outcome(outcome));
    assert_eq!(value["code"], codes::CLI_EXECUTION_FAILED);
    assert!(value["error"]
        .as_str()
        .unwrap()
        .starts_with("CLI execution failed:"));
    assert!(value["suggestion"].as_str().is_some());
}

#[test]
fn test_call_tool_result_flags() {
    let ok: CallToolResult = ToolResponse::success("[]").into();
    assert_eq!(ok.is_error, Some(false));

    let failed: CallToolResult = convert::from_outcome(Err(RunError::Cancelled)).into();
    assert_eq!(failed.is_error, Some(true));
    assert_eq!(failed.content.len(), 1);
    match &failed.content[0].raw {
        RawContent::Text(text) => assert!(text.text.contains(codes::CANCELLED)),
        other => panic!("expected text content, got {other:?}"),
    }
}
