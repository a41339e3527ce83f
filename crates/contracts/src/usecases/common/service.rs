use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Route used both as the availability probe and the workbook listing
pub const FILES_ENDPOINT: &str = "/api/files";

/// Reply of `GET /api/files`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesResponse {
    #[serde(default)]
    pub files: Vec<String>,
}

/// Error body the service sends with every non-2xx reply
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ServiceErrorBody {
    /// The message, if it carries any text
    pub fn into_message(self) -> Option<String> {
        self.error.filter(|m| !m.trim().is_empty())
    }
}

/// Transport level outcome of a failed call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceFailure {
    /// Network error, nothing came back
    Unreachable(String),
    /// Non-2xx status; `error` is the server message if it sent one
    Rejected { status: u16, error: Option<String> },
    /// 2xx with a body that is not JSON
    Malformed(String),
}

/// The external compute service.
///
/// Requests are JSON objects, replies are opaque JSON handed to the use case
/// renderers. Futures are `!Send`: the panel runs on the browser event loop.
#[async_trait(?Send)]
pub trait ComputeService {
    async fn list_files(&self) -> Result<FilesResponse, ServiceFailure>;

    async fn post_json(&self, endpoint: &str, body: Value) -> Result<Value, ServiceFailure>;
}
