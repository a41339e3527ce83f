use async_trait::async_trait;
use contracts::shared::config::PanelConfig;
use contracts::usecases::common::service::FILES_ENDPOINT;
use contracts::usecases::common::{
    ComputeService, FilesResponse, ServiceErrorBody, ServiceFailure,
};
use gloo_net::http::{Request, Response};
use serde_json::Value;

/// `fetch`-based client for the local compute service
#[derive(Debug, Clone)]
pub struct HttpComputeService {
    config: PanelConfig,
}

impl HttpComputeService {
    pub fn new(config: PanelConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl ComputeService for HttpComputeService {
    async fn list_files(&self) -> Result<FilesResponse, ServiceFailure> {
        let response = Request::get(&self.config.endpoint_url(FILES_ENDPOINT))
            .send()
            .await
            .map_err(|e| ServiceFailure::Unreachable(format!("Request failed: {}", e)))?;

        if !response.ok() {
            return Err(rejection(&response).await);
        }

        response
            .json::<FilesResponse>()
            .await
            .map_err(|e| ServiceFailure::Malformed(format!("Failed to parse response: {}", e)))
    }

    async fn post_json(&self, endpoint: &str, body: Value) -> Result<Value, ServiceFailure> {
        // `.json()` also sets Content-Type: application/json
        let response = Request::post(&self.config.endpoint_url(endpoint))
            .json(&body)
            .map_err(|e| ServiceFailure::Malformed(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ServiceFailure::Unreachable(format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            return Err(rejection(&response).await);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ServiceFailure::Malformed(format!("Failed to parse response: {}", e)))
    }
}

/// Non-2xx reply; keeps the service's `error` text when the body has one
async fn rejection(response: &Response) -> ServiceFailure {
    let status = response.status();
    let error = response
        .json::<ServiceErrorBody>()
        .await
        .ok()
        .and_then(ServiceErrorBody::into_message);

    log::warn!("{} answered HTTP {}", response.url(), status);
    ServiceFailure::Rejected { status, error }
}
