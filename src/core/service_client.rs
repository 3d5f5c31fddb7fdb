// src/core/service_client.rs
//! HTTP client for the resume ranking service - one method per endpoint

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, trace};

use crate::core::config_manager::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::types::{MatchRequest, MatchResponse, UploadRequest, UploadResponse};
use crate::utils::truncate_text;

pub const UPLOAD_ENDPOINT: &str = "/upload";
pub const MATCH_ENDPOINT: &str = "/match";

#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create new service client with configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 1. Resume upload - sends the file as multipart, receives a status message
    pub async fn upload_resume(&self, request: UploadRequest) -> ClientResult<UploadResponse> {
        let url = format!("{}{}", self.base_url, UPLOAD_ENDPOINT);
        let file_name = request.file().file_name.clone();
        let size = request.file().len();
        let form = request.into_form(UPLOAD_ENDPOINT)?;

        info!("Uploading {} ({} bytes) to {}", file_name, size, url);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::transport(UPLOAD_ENDPOINT, e))?;

        Self::read_json(UPLOAD_ENDPOINT, response).await
    }

    /// 2. Candidate matching - sends the job description, receives ranked candidates
    pub async fn match_candidates(&self, request: &MatchRequest) -> ClientResult<MatchResponse> {
        let url = format!("{}{}", self.base_url, MATCH_ENDPOINT);

        info!(
            "Requesting matches from {} for \"{}\"",
            url,
            truncate_text(request.job_description(), 60)
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::transport(MATCH_ENDPOINT, e))?;

        Self::read_json(MATCH_ENDPOINT, response).await
    }

    async fn read_json<R>(endpoint: &str, response: reqwest::Response) -> ClientResult<R>
    where
        R: DeserializeOwned,
    {
        let status = response.status();
        trace!("{} response status: {}", endpoint, status);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(ClientError::Status {
                endpoint: endpoint.to_string(),
                status,
                body: error_text,
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ClientError::transport(endpoint, e))?;

        debug!("Raw {} response: {}", endpoint, truncate_text(&response_text, 500));

        serde_json::from_str(&response_text).map_err(|e| ClientError::decode(endpoint, e))
    }
}
