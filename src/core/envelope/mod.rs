//! # Response envelope
//!
//! Both CLIs print one JSON object on stdout tagged by `type`:
//!
//! ```text
//! {"type":"sync","status":"ok","data":<any>}
//! {"type":"async","status":"initiated","processes":[{"processId":"..","status":"PENDING"}]}
//! {"type":"error","code":"..","error":"..","suggestion":"..","context":<any>}
//! ```
//!
//! Payloads are kept as raw JSON so they can be forwarded without being
//! re-serialized.

use crate::core::error::EnvelopeError;
use crate::core::executor::ExecutionResult;
use crate::core::types::ProcessDescriptor;
use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;
use serde_json::Value;

/// Bytes of stdout or stderr kept in parse diagnostics.
pub const DIAGNOSTIC_LIMIT: usize = 4096;

const SYNC: &str = "sync";
const ASYNC: &str = "async";
const ERROR: &str = "error";

/// Parsed CLI output.
#[derive(Debug)]
pub enum Envelope {
    Sync {
        status: Option<String>,
        data: Box<RawValue>,
    },
    Async {
        status: Option<String>,
        processes: Box<RawValue>,
    },
    Error(DomainError),
    /// A well-formed envelope with a `type` this bridge does not know.
    Unknown { kind: String },
}

/// Failure reported by the CLI itself, passed through verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainError {
    pub code: String,
    pub message: String,
    pub suggestion: Option<String>,
    pub context: Option<Value>,
}

#[derive(Deserialize)]
struct WireEnvelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default, deserialize_with = "present")]
    data: Option<Box<RawValue>>,
    #[serde(default, deserialize_with = "present")]
    processes: Option<Box<RawValue>>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    suggestion: Option<String>,
    #[serde(default)]
    context: Option<Value>,
}

// A field that is present, even as `null`, counts as present.
fn present<'de, D>(deserializer: D) -> Result<Option<Box<RawValue>>, D::Error>
where
    D: Deserializer<'de>,
{
    Box::<RawValue>::deserialize(deserializer).map(Some)
}

impl Envelope {
    /// Parse captured output. The exit code only ends up in diagnostics.
    pub fn parse(result: &ExecutionResult) -> Result<Envelope, EnvelopeError> {
        if result.stdout.is_empty() {
            return Err(EnvelopeError::EmptyOutput {
                exit_code: result.exit_code,
                stderr: excerpt(&result.stderr),
            });
        }

        let malformed = |reason: String| EnvelopeError::Malformed {
            reason,
            exit_code: result.exit_code,
            stderr: excerpt(&result.stderr),
            raw: excerpt(&result.stdout),
        };

        let wire: WireEnvelope =
            serde_json::from_slice(&result.stdout).map_err(|err| malformed(err.to_string()))?;

        match wire.kind.as_str() {
            SYNC => {
                let data = wire
                    .data
                    .ok_or_else(|| malformed("sync envelope without data".to_string()))?;
                Ok(Envelope::Sync {
                    status: wire.status,
                    data,
                })
            }
            ASYNC => {
                let processes = wire
                    .processes
                    .ok_or_else(|| malformed("async envelope without processes".to_string()))?;
                Ok(Envelope::Async {
                    status: wire.status,
                    processes,
                })
            }
            ERROR => Ok(Envelope::Error(DomainError {
                code: wire.code.unwrap_or_default(),
                message: wire.error.unwrap_or_default(),
                suggestion: wire.suggestion.filter(|s| !s.is_empty()),
                context: wire.context.filter(|c| !c.is_null()),
            })),
            _ => Ok(Envelope::Unknown { kind: wire.kind }),
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Envelope::Sync { .. } => SYNC,
            Envelope::Async { .. } => ASYNC,
            Envelope::Error(_) => ERROR,
            Envelope::Unknown { kind } => kind,
        }
    }

    /// Raw success payload: `data` for sync, `processes` for async.
    pub fn payload(&self) -> Option<&RawValue> {
        match self {
            Envelope::Sync { data, .. } => Some(data),
            Envelope::Async { processes, .. } => Some(processes),
            _ => None,
        }
    }

    /// Typed view of an async envelope's descriptors. Empty for other kinds.
    pub fn descriptors(&self) -> Result<Vec<ProcessDescriptor>, serde_json::Error> {
        match self {
            Envelope::Async { processes, .. } => serde_json::from_str(processes.get()),
            _ => Ok(Vec::new()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Envelope::Error(_) | Envelope::Unknown { .. })
    }
}

/// Lossy text of at most `DIAGNOSTIC_LIMIT` bytes, marked when cut.
fn excerpt(bytes: &[u8]) -> String {
    if bytes.len() <= DIAGNOSTIC_LIMIT {
        return String::from_utf8_lossy(bytes).into_owned();
    }
    let mut text = String::from_utf8_lossy(&bytes[..DIAGNOSTIC_LIMIT]).into_owned();
    text.push_str(&format!(
        "... [truncated {} bytes]",
        bytes.len() - DIAGNOSTIC_LIMIT
    ));
    text
}
