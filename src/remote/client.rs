//! HTTP client for the pipeline endpoints

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::AppConfig;
use crate::errors::{PumpError, Result};
use crate::models::pipeline::Pipeline;
use crate::models::responses::ApiResponse;

pub const LIST_PIPELINE_PATH: &str = "api/v1/list-pipeline";
pub const CREATE_PIPELINE_PATH: &str = "api/v1/create-pipeline";
pub const REMOVE_PIPELINE_PATH: &str = "api/v1/remove-pipeline";

/// Operations the dashboard needs from the backend
#[async_trait]
pub trait PipelineApi: Send + Sync {
    /// Current pipelines; a `null` payload is returned as an empty list
    async fn list_pipelines(&self) -> Result<Vec<Pipeline>>;

    async fn create_pipeline(&self, pipeline: &Pipeline) -> Result<()>;

    async fn remove_pipeline(&self, pipeline: &Pipeline) -> Result<()>;
}

/// [`PipelineApi`] over HTTP with reqwest
#[derive(Debug, Clone)]
pub struct HttpPipelineClient {
    client: reqwest::Client,
    base_api: String,
}

impl HttpPipelineClient {
    pub fn new(base_api: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_api: base_api.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(&config.base_api, config.request_timeout())
    }

    pub fn base_api(&self) -> &str {
        &self.base_api
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_api, path)
    }

    /// Send the request and unwrap the `{error, msg, data}` envelope.
    ///
    /// Connection failures, timeouts, non-2xx statuses and undecodable
    /// bodies all map to [`PumpError::Transport`].
    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<Option<T>> {
        let response = request.send().await?.error_for_status()?;
        let status = response.status();
        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| PumpError::Transport(format!("failed to decode response: {}", e)))?;
        log::debug!("Got HTTP {} (error: {})", status, envelope.error);
        envelope.into_result()
    }
}

#[async_trait]
impl PipelineApi for HttpPipelineClient {
    async fn list_pipelines(&self) -> Result<Vec<Pipeline>> {
        let url = self.endpoint(LIST_PIPELINE_PATH);
        log::debug!("GET {}", url);
        let pipelines: Option<Vec<Pipeline>> = self.send(self.client.get(&url)).await?;
        Ok(pipelines.unwrap_or_default())
    }

    async fn create_pipeline(&self, pipeline: &Pipeline) -> Result<()> {
        let url = self.endpoint(CREATE_PIPELINE_PATH);
        log::debug!("POST {} for {}", url, pipeline.qualified_table());
        self.send::<serde_json::Value>(self.client.post(&url).json(pipeline))
            .await?;
        Ok(())
    }

    async fn remove_pipeline(&self, pipeline: &Pipeline) -> Result<()> {
        let url = self.endpoint(REMOVE_PIPELINE_PATH);
        log::debug!("POST {} for {}", url, pipeline.qualified_table());
        self.send::<serde_json::Value>(self.client.post(&url).json(pipeline))
            .await?;
        Ok(())
    }
}
