use serde_json::{json, Value};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use zaia_mcp::core::convert::ToolResponse;
use zaia_mcp::core::error::codes;
use zaia_mcp::core::executor::{async_result, sync_result, ExecutionResult, MockExecutor};
use zaia_mcp::core::types::Program;
use zaia_mcp::tools::Dispatcher;

fn dispatcher(mock: &Arc<MockExecutor>) -> Dispatcher {
    Dispatcher::new(mock.clone())
}

async fn call(dispatcher: &Dispatcher, name: &str, arguments: Value) -> ToolResponse {
    let arguments = match arguments {
        Value::Object(map) => Some(map),
        _ => None,
    };
    dispatcher
        .call(name, arguments, &CancellationToken::new())
        .await
        .expect("tool should exist")
}

fn code(response: &ToolResponse) -> String {
    assert!(response.is_error, "expected failure, got {response:?}");
    let value: Value = serde_json::from_str(&response.text).unwrap();
    value["code"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_missing_required_fields_never_spawn() {
    let mock = Arc::new(MockExecutor::new().with_default(sync_result("{}")));
    let dispatcher = dispatcher(&mock);

    let cases = [
        ("zerops_logs", json!({})),
        ("zerops_knowledge", json!({"limit": 5})),
        ("zerops_process", json!({"action": "cancel"})),
        ("zerops_manage", json!({"action": "restart"})),
        ("zerops_manage", json!({"serviceHostname": "api"})),
        ("zerops_env", json!({"serviceHostname": "api"})),
        ("zerops_env", json!({"action": "get"})),
        ("zerops_import", json!({})),
        ("zerops_delete", json!({"confirm": true})),
        ("zerops_subdomain", json!({"action": "enable"})),
        ("zerops_subdomain", json!({"serviceHostname": "web"})),
        ("zerops_validate", json!({})),
    ];
    for (name, arguments) in cases {
        let response = call(&dispatcher, name, arguments.clone()).await;
        assert_eq!(code(&response), codes::INVALID_INPUT, "{name} {arguments}");
    }
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_absent_arguments_behave_like_empty_object() {
    let mock =
        Arc::new(MockExecutor::new().with_zaia_response(&["discover"], sync_result("{}")));
    let dispatcher = dispatcher(&mock);
    let response = dispatcher
        .call("zerops_discover", None, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(response, ToolResponse::success("{}"));

    let response = dispatcher
        .call("zerops_logs", None, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(code(&response), codes::INVALID_INPUT);
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_unknown_tool_is_not_dispatched() {
    let mock = Arc::new(MockExecutor::new().with_default(sync_result("{}")));
    let response = dispatcher(&mock)
        .call("zerops_events", None, &CancellationToken::new())
        .await;
    assert!(response.is_none());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let mock = Arc::new(MockExecutor::new().with_zaia_response(
        &["delete", "--service", "db", "--confirm"],
        async_result(r#"[{"processId":"proc-del","status":"PENDING"}]"#),
    ));
    let dispatcher = dispatcher(&mock);

    let refused = call(
        &dispatcher,
        "zerops_delete",
        json!({"serviceHostname": "db", "confirm": false}),
    )
    .await;
    assert_eq!(code(&refused), codes::INVALID_INPUT);
    assert_eq!(mock.call_count(), 0);

    let accepted = call(
        &dispatcher,
        "zerops_delete",
        json!({"serviceHostname": "db", "confirm": true}),
    )
    .await;
    assert!(!accepted.is_error);
    assert_eq!(mock.call_count(), 1);
    let args = mock.last_call().unwrap().args;
    assert!(args.contains(&"db".to_string()));
    assert!(args.contains(&"--confirm".to_string()));
}

#[tokio::test]
async fn test_import_needs_exactly_one_source() {
    let mock = Arc::new(
        MockExecutor::new()
            .with_zaia_response(&["import", "--content", "services: []"], async_result("[]"))
            .with_zaia_response(
                &["import", "--file", "/tmp/import.yml", "--dry-run"],
                sync_result("{}"),
            ),
    );
    let dispatcher = dispatcher(&mock);

    let both = call(
        &dispatcher,
        "zerops_import",
        json!({"content": "services: []", "filePath": "/tmp/import.yml"}),
    )
    .await;
    assert_eq!(code(&both), codes::INVALID_INPUT);
    let neither = call(&dispatcher, "zerops_import", json!({"dryRun": true})).await;
    assert_eq!(code(&neither), codes::INVALID_INPUT);
    assert_eq!(mock.call_count(), 0);

    let content = call(&dispatcher, "zerops_import", json!({"content": "services: []"})).await;
    assert!(!content.is_error);
    assert!(mock.last_call().unwrap().args.contains(&"--content".to_string()));

    let file = call(
        &dispatcher,
        "zerops_import",
        json!({"filePath": "/tmp/import.yml", "dryRun": true}),
    )
    .await;
    assert!(!file.is_error);
    assert!(mock.last_call().unwrap().args.contains(&"--file".to_string()));
    assert_eq!(mock.call_count(), 2);
}

#[tokio::test]
async fn test_deploy_always_uses_zcli() {
    let mock = Arc::new(MockExecutor::new().with_default(async_result("[]")));
    let dispatcher = dispatcher(&mock);

    for arguments in [
        json!({}),
        json!({"workingDir": "/srv/app"}),
        json!({"serviceId": "svc-1", "workingDir": "/srv/app"}),
    ] {
        call(&dispatcher, "zerops_deploy", arguments).await;
    }

    let calls = mock.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|call| call.program == Program::Zcli));
    assert!(calls.iter().all(|call| call.args[0] == "push"));
}

#[tokio::test]
async fn test_every_other_tool_uses_zaia() {
    let mock = Arc::new(MockExecutor::new().with_default(sync_result("{}")));
    let dispatcher = dispatcher(&mock);

    let cases = [
        ("zerops_discover", json!({})),
        ("zerops_logs", json!({"serviceHostname": "api"})),
        ("zerops_validate", json!({"content": "x"})),
        ("zerops_knowledge", json!({"query": "nodejs"})),
        ("zerops_process", json!({"processId": "proc-1"})),
        ("zerops_manage", json!({"action": "start", "serviceHostname": "api"})),
        ("zerops_env", json!({"action": "get", "project": true})),
        ("zerops_import", json!({"filePath": "import.yml"})),
        ("zerops_delete", json!({"serviceHostname": "api", "confirm": true})),
        ("zerops_subdomain", json!({"serviceHostname": "api", "action": "disable"})),
    ];
    for (name, arguments) in cases {
        let response = call(&dispatcher, name, arguments).await;
        assert!(!response.is_error, "{name}: {}", response.text);
    }
    assert_eq!(mock.call_count(), 10);
    assert!(mock.calls().iter().all(|call| call.program == Program::Zaia));
}

#[tokio::test]
async fn test_env_variables_keep_their_boundaries() {
    let mock = Arc::new(MockExecutor::new().with_zaia_response(
        &["env", "set", "--service", "api", "A=1", "B=2"],
        async_result("[]"),
    ));
    let dispatcher = dispatcher(&mock);

    let single = call(
        &dispatcher,
        "zerops_env",
        json!({"action": "set", "serviceHostname": "api", "variables": ["A=1 B=2"]}),
    )
    .await;
    assert_eq!(code(&single), codes::CLI_EXECUTION_FAILED);
    assert_eq!(
        mock.last_call().unwrap().args,
        vec!["env", "set", "--service", "api", "A=1 B=2"]
    );

    let pair = call(
        &dispatcher,
        "zerops_env",
        json!({"action": "set", "serviceHostname": "api", "variables": ["A=1", "B=2"]}),
    )
    .await;
    assert_eq!(pair, ToolResponse::success("[]"));
}

#[tokio::test]
async fn test_subdomain_enable_twice_succeeds_twice() {
    let mock = Arc::new(MockExecutor::new().with_zaia_response(
        &["subdomain", "enable", "--service", "web"],
        sync_result(r#"{"subdomain":"web-abc.prg1.zerops.app","status":"ENABLED"}"#),
    ));
    let dispatcher = dispatcher(&mock);

    for _ in 0..2 {
        let response = call(
            &dispatcher,
            "zerops_subdomain",
            json!({"serviceHostname": "web", "action": "enable"}),
        )
        .await;
        assert!(!response.is_error);
    }
    assert_eq!(mock.call_count(), 2);
}

#[tokio::test]
async fn test_payloads_are_forwarded_byte_for_byte() {
    let data = r#"{"project":{"id":"p1"},  "services":[{"hostname":"api","status":"ACTIVE"}]}"#;
    let processes = r#"[ {"processId":"proc-7","status":"RUNNING"} ]"#;
    let mock = Arc::new(
        MockExecutor::new()
            .with_zaia_response(&["discover"], sync_result(data))
            .with_zaia_response(&["restart", "--service", "api"], async_result(processes)),
    );
    let dispatcher = dispatcher(&mock);

    let sync = call(&dispatcher, "zerops_discover", json!({})).await;
    assert_eq!(sync, ToolResponse::success(data));

    let async_response = call(
        &dispatcher,
        "zerops_manage",
        json!({"action": "restart", "serviceHostname": "api"}),
    )
    .await;
    assert_eq!(async_response, ToolResponse::success(processes));
}

#[tokio::test]
async fn test_exit_code_is_irrelevant_with_valid_envelope() {
    let mut result = sync_result(r#"{"entries":[]}"#);
    result.exit_code = 1;
    let mock =
        Arc::new(MockExecutor::new().with_zaia_response(&["logs", "--service", "api"], result));
    let response = call(
        &dispatcher(&mock),
        "zerops_logs",
        json!({"serviceHostname": "api"}),
    )
    .await;
    assert_eq!(response, ToolResponse::success(r#"{"entries":[]}"#));
}

#[tokio::test]
async fn test_empty_stdout_is_a_failure() {
    let mock = Arc::new(MockExecutor::new().with_zaia_response(
        &["discover"],
        ExecutionResult::new("", "zaia: command not found", 127),
    ));
    let response = call(&dispatcher(&mock), "zerops_discover", json!({})).await;
    assert_eq!(code(&response), codes::EMPTY_OUTPUT);
}

#[tokio::test]
async fn test_runner_failure_becomes_response() {
    let mock = Arc::new(MockExecutor::new().with_zaia_error(&["discover"], "spawn failed"));
    let response = call(&dispatcher(&mock), "zerops_discover", json!({})).await;
    assert_eq!(code(&response), codes::CLI_EXECUTION_FAILED);
    assert!(response.text.contains("spawn failed"));
}
