use zaia_mcp::core::envelope::Envelope;
use zaia_mcp::core::error::EnvelopeError;
use zaia_mcp::core::executor::ExecutionResult;
use zaia_mcp::core::types::ProcessStatus;

fn output(stdout: &str, exit_code: i32) -> ExecutionResult {
    ExecutionResult::new(stdout, "", exit_code)
}

#[test]
fn test_sync_payload_is_kept_verbatim() {
    let raw = r#"{"type":"sync","status":"ok","data":{ "b" : 2,"a":[1, 2.50] }}"#;
    let envelope = Envelope::parse(&output(raw, 0)).unwrap();
    assert_eq!(envelope.kind(), "sync");
    assert_eq!(
        envelope.payload().unwrap().get(),
        r#"{ "b" : 2,"a":[1, 2.50] }"#
    );
}

#[test]
fn test_async_payload_and_descriptors() {
    let raw = r#"{"type":"async","status":"initiated","processes":[{"processId":"proc-1","status":"PENDING"},{"processId":"proc-2","status":"RUNNING"}]}"#;
    let envelope = Envelope::parse(&output(raw, 0)).unwrap();
    assert!(matches!(envelope, Envelope::Async { .. }));

    let descriptors = envelope.descriptors().unwrap();
    assert_eq!(descriptors.len(), 2);
    assert_eq!(descriptors[0].process_id, "proc-1");
    assert_eq!(descriptors[0].status, ProcessStatus::Pending);
    assert_eq!(descriptors[1].status, ProcessStatus::Running);
    assert!(!descriptors[1].status.is_terminal());
}

#[test]
fn test_error_envelope_fields() {
    let raw = r#"{"type":"error","code":"SERVICE_NOT_FOUND","error":"Service 'xyz' not found","suggestion":"Run zerops_discover","context":{"hostname":"xyz"}}"#;
    match Envelope::parse(&output(raw, 2)).unwrap() {
        Envelope::Error(err) => {
            assert_eq!(err.code, "SERVICE_NOT_FOUND");
            assert_eq!(err.message, "Service 'xyz' not found");
            assert_eq!(err.suggestion.as_deref(), Some("Run zerops_discover"));
            assert_eq!(err.context.unwrap()["hostname"], "xyz");
        }
        other => panic!("expected error envelope, got {other:?}"),
    }
}

#[test]
fn test_unknown_type_is_reported_not_rejected() {
    let envelope = Envelope::parse(&output(r#"{"type":"stream","data":1}"#, 0)).unwrap();
    match &envelope {
        Envelope::Unknown { kind } => assert_eq!(kind, "stream"),
        other => panic!("expected unknown envelope, got {other:?}"),
    }
    assert!(envelope.is_error());
}

#[test]
fn test_non_zero_exit_with_valid_envelope_parses() {
    for exit_code in [0, 1, 2, 127] {
        let envelope =
            Envelope::parse(&output(r#"{"type":"sync","status":"ok","data":[]}"#, exit_code))
                .unwrap();
        assert_eq!(envelope.payload().unwrap().get(), "[]");
    }
}

#[test]
fn test_empty_stdout_fails_regardless_of_exit_code() {
    for exit_code in [0, 1] {
        let result = ExecutionResult::new("", "zaia: not logged in\n", exit_code);
        match Envelope::parse(&result).unwrap_err() {
            EnvelopeError::EmptyOutput {
                exit_code: reported,
                stderr,
            } => {
                assert_eq!(reported, exit_code);
                assert!(stderr.contains("not logged in"));
            }
            other => panic!("expected empty output, got {other:?}"),
        }
    }
}

#[test]
fn test_invalid_json_is_malformed() {
    let err = Envelope::parse(&output("Error: something broke", 1)).unwrap_err();
    match err {
        EnvelopeError::Malformed { raw, exit_code, .. } => {
            assert_eq!(raw, "Error: something broke");
            assert_eq!(exit_code, 1);
        }
        other => panic!("expected malformed, got {other:?}"),
    }
}

#[test]
fn test_sync_without_data_is_malformed() {
    let err = Envelope::parse(&output(r#"{"type":"sync","status":"ok"}"#, 0)).unwrap_err();
    assert!(err.to_string().contains("sync envelope without data"));
}

#[test]
fn test_async_without_processes_is_malformed() {
    let err = Envelope::parse(&output(r#"{"type":"async","status":"initiated"}"#, 0)).unwrap_err();
    assert!(matches!(err, EnvelopeError::Malformed { .. }));
}

#[test]
fn test_descriptors_of_sync_envelope_are_empty() {
    let envelope = Envelope::parse(&output(r#"{"type":"sync","data":{}}"#, 0)).unwrap();
    assert!(envelope.descriptors().unwrap().is_empty());
}

#[test]
fn test_descriptor_with_unknown_status_fails_typed_view_only() {
    let raw = r#"{"type":"async","processes":[{"processId":"p","status":"PAUSED"}]}"#;
    let envelope = Envelope::parse(&output(raw, 0)).unwrap();
    assert!(envelope.payload().is_some());
    assert!(envelope.descriptors().is_err());
}
