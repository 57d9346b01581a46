//! Knowledge base documents exposed as MCP resources.
//!
//! `zerops://docs/<path>` is read with `zaia search --get <uri>`; the sync
//! payload is `{"uri","title","content"}` and only `content` is returned.

use crate::core::envelope::Envelope;
use crate::core::error::RunError;
use crate::core::executor::Executor;
use rmcp::model::{ResourceContents, ResourceTemplate};
use rmcp::ErrorData;
use serde::Deserialize;
use serde_json::json;
use tokio_util::sync::CancellationToken;

pub const DOCS_URI_PREFIX: &str = "zerops://docs/";
pub const DOCS_URI_TEMPLATE: &str = "zerops://docs/{+path}";
pub const DOCS_NAME: &str = "zerops-docs";
pub const DOCS_MIME_TYPE: &str = "text/markdown";
const DOCS_DESCRIPTION: &str = "Zerops knowledge base documents. Search with \
the zerops_knowledge tool, then read individual documents through this template.";

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("resource not found: {uri}")]
    NotFound { uri: String },
    #[error("failed to fetch resource {uri}: {source}")]
    Fetch {
        uri: String,
        #[source]
        source: RunError,
    },
}

impl From<ResourceError> for ErrorData {
    fn from(err: ResourceError) -> Self {
        match &err {
            ResourceError::NotFound { uri } => {
                ErrorData::resource_not_found(err.to_string(), Some(json!({ "uri": uri })))
            }
            ResourceError::Fetch { .. } => ErrorData::internal_error(err.to_string(), None),
        }
    }
}

/// A knowledge base document as returned by `zaia search --get`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub title: String,
    pub content: String,
}

pub fn docs_template() -> Result<ResourceTemplate, serde_json::Error> {
    serde_json::from_value(json!({
        "uriTemplate": DOCS_URI_TEMPLATE,
        "name": DOCS_NAME,
        "description": DOCS_DESCRIPTION,
        "mimeType": DOCS_MIME_TYPE,
    }))
}

/// Fetch one document. Anything other than a sync envelope carrying
/// `content` is reported as not found.
pub async fn read_doc(
    executor: &dyn Executor,
    uri: &str,
    cancel: &CancellationToken,
) -> Result<Document, ResourceError> {
    let not_found = || ResourceError::NotFound {
        uri: uri.to_string(),
    };

    if !uri.starts_with(DOCS_URI_PREFIX) || uri.len() == DOCS_URI_PREFIX.len() {
        return Err(not_found());
    }

    let args = vec!["search".to_string(), "--get".to_string(), uri.to_string()];
    let result = executor
        .run_zaia(&args, cancel)
        .await
        .map_err(|source| ResourceError::Fetch {
            uri: uri.to_string(),
            source,
        })?;

    let data = match Envelope::parse(&result) {
        Ok(Envelope::Sync { data, .. }) => data,
        Ok(other) => {
            tracing::debug!(uri, kind = other.kind(), "document lookup returned no document");
            return Err(not_found());
        }
        Err(err) => {
            tracing::debug!(uri, error = %err, "document lookup output unreadable");
            return Err(not_found());
        }
    };

    serde_json::from_str::<Document>(data.get()).map_err(|err| {
        tracing::debug!(uri, error = %err, "document payload without content");
        not_found()
    })
}

/// Wrap a document as markdown resource contents under the requested URI.
pub fn to_contents(uri: &str, document: Document) -> ResourceContents {
    let mut contents = ResourceContents::text(document.content, uri);
    if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
        *mime_type = Some(DOCS_MIME_TYPE.to_string());
    }
    contents
}
