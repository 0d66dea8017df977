use std::time::{Duration, Instant};

use reqwest::multipart;
use reqwest::Client;
use tracing::{debug, info};

use super::types::{
    FileUpload, IngestResponse, ResearchRequest, ResearchResult, SuggestRequest, SuggestResponse,
};
use crate::config::{BackendConfig, RequestConfig};
use crate::error::{BackendError, BackendResult};

/// Client for the research backend HTTP API
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    timeout_ms: u64,
}

impl BackendClient {
    /// Create a new backend client
    pub fn new(config: &BackendConfig, request_config: RequestConfig) -> BackendResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(request_config.timeout_ms))
            .build()
            .map_err(BackendError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_ms: request_config.timeout_ms,
        })
    }

    /// Run a research query against `/research`
    pub async fn research(&self, query: &str, max_sources: u32) -> BackendResult<ResearchResult> {
        let url = format!("{}/research", self.base_url);
        let body = ResearchRequest {
            query: query.to_string(),
            max_sources,
        };

        debug!(query = %body.query, max_sources, "Sending research request");
        let start = Instant::now();

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        let result: ResearchResult = Self::read_json(response).await?;

        info!(
            latency_ms = start.elapsed().as_millis(),
            sources_found = result.sources_found,
            reasoning_steps = result.reasoning_steps,
            "Research request settled"
        );

        Ok(result)
    }

    /// Fetch query refinement suggestions from `/suggest`
    pub async fn suggest(&self, query: &str) -> BackendResult<SuggestResponse> {
        let url = format!("{}/suggest", self.base_url);
        let body = SuggestRequest {
            query: query.to_string(),
        };

        let start = Instant::now();

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        let suggest: SuggestResponse = Self::read_json(response).await?;

        debug!(
            latency_ms = start.elapsed().as_millis(),
            count = suggest.suggestions.len(),
            success = suggest.success,
            "Suggestion request settled"
        );

        Ok(suggest)
    }

    /// Upload documents for ingestion via one multipart request to `/ingest`.
    ///
    /// All files travel in a single form with the `files` field repeated
    /// per file, which is what the backend expects.
    pub async fn ingest(&self, files: Vec<FileUpload>) -> BackendResult<IngestResponse> {
        let url = format!("{}/ingest", self.base_url);

        let mut form = multipart::Form::new();
        for file in files {
            let mime = file.mime_type();
            let part = multipart::Part::bytes(file.bytes)
                .file_name(file.name)
                .mime_str(mime)
                .map_err(BackendError::Http)?;
            form = form.part("files", part);
        }

        let start = Instant::now();

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        let ingest: IngestResponse = Self::read_json(response).await?;

        info!(
            latency_ms = start.elapsed().as_millis(),
            success = ingest.success,
            "Ingest request settled"
        );

        Ok(ingest)
    }

    /// Get the base URL (for testing)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn classify_transport_error(&self, e: reqwest::Error) -> BackendError {
        if e.is_timeout() {
            BackendError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            BackendError::Http(e)
        }
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> BackendResult<T> {
        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: error_body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse {
                message: format!("Failed to parse response: {}", e),
            })
    }
}
