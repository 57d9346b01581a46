pub mod config;
pub mod convert;
pub mod envelope;
pub mod error;
pub mod executor;
pub mod types;

pub use config::{ConfigLoader, ServerConfig};
pub use convert::ToolResponse;
pub use envelope::{DomainError, Envelope};
pub use error::{ConfigError, EnvelopeError, RunError, ToolFailure};
pub use executor::{CliExecutor, ExecutionResult, Executor, MockExecutor};
pub use types::*;
